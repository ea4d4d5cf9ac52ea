//! Name resolution — member lookup tolerant of snake_case vs camelCase
//!
//! # INV: exact first, then camelized, nothing else
//!
//! Members declared with `camelize: false` are stored under their literal
//! snake_case name, so the exact lookup must run before the camelized one.
//! The reverse transform (camelCase → snake_case) is never attempted.

use crate::{Candidate, MemberCollection};
use std::borrow::Cow;
use tracing::trace;

/// Camel-case a member name the way GraphQL schemas do.
///
/// Names without underscores are returned unchanged. Otherwise the name is
/// split on `_`, empty segments are dropped, every segment is capitalized
/// (first letter upper, rest lower) and the very first letter is lowered.
/// Leading underscores survive.
///
/// # Example
///
/// ```
/// use gqlmatch::camelize;
///
/// assert_eq!(camelize("is_test"), "isTest");
/// assert_eq!(camelize("isTest"), "isTest");
/// assert_eq!(camelize("__typename_hint"), "__typenameHint");
/// ```
#[must_use]
pub fn camelize(name: &str) -> Cow<'_, str> {
    if name == "_" || !name.contains('_') {
        return Cow::Borrowed(name);
    }

    let leading = name.len() - name.trim_start_matches('_').len();
    let mut camelized = String::with_capacity(name.len());
    camelized.push_str(&name[..leading]);

    let mut first = true;
    for segment in name.split('_').filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            if first {
                camelized.extend(head.to_lowercase());
                first = false;
            } else {
                camelized.extend(head.to_uppercase());
            }
            camelized.extend(chars.flat_map(char::to_lowercase));
        }
    }
    Cow::Owned(camelized)
}

/// Look up `requested` in `collection`: exact name, then its camel-cased form.
///
/// # Example
///
/// ```
/// use gqlmatch::{resolve, Candidate};
/// use std::collections::BTreeMap;
///
/// #[derive(Debug)]
/// struct Field;
/// impl Candidate for Field {}
///
/// let mut fields = BTreeMap::new();
/// fields.insert("isTest".to_string(), Field);
///
/// assert!(resolve(&fields, "is_test").is_some());
/// assert!(resolve(&fields, "isTest").is_some());
/// assert!(resolve(&fields, "is_tested").is_none());
/// ```
pub fn resolve<'a>(
    collection: &'a dyn MemberCollection,
    requested: &str,
) -> Option<&'a dyn Candidate> {
    if let Some(member) = collection.member(requested) {
        trace!(requested, "resolved member by exact name");
        return Some(member);
    }

    let camelized = camelize(requested);
    if camelized == requested {
        return None;
    }
    let member = collection.member(&camelized);
    if member.is_some() {
        trace!(requested, camelized = %camelized, "resolved member by camelized name");
    }
    member
}
