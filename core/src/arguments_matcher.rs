//! `ArgumentsMatcher` — Several typed arguments in one assertion

use crate::{
    display_name, resolve, signature, Candidate, CollectionKind, MatchError, SchemaMatcher,
    TypeLike,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Matches a candidate that accepts every expected argument with the expected type.
///
/// Argument names resolve like member names (exact, then camelized). Expected
/// arguments are kept sorted by name, which fixes the order in messages.
///
/// # Example
///
/// ```
/// use gqlmatch::prelude::*;
///
/// let matcher = accept_arguments([("id", "ID!"), ("age", "Int")]);
/// assert_eq!(matcher.describe(), "accept arguments age(Int), id(ID!)");
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentsMatcher {
    expected: BTreeMap<String, String>,
    candidate: Option<String>,
}

impl ArgumentsMatcher {
    /// Expect each `(name, type)` pair.
    pub fn new<I, N, T>(expected: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: TypeLike,
    {
        Self {
            expected: expected
                .into_iter()
                .map(|(name, ty)| (name.into(), signature(&ty)))
                .collect(),
            candidate: None,
        }
    }

    fn describe_arguments(&self) -> String {
        self.expected
            .iter()
            .map(|(name, ty)| format!("{name}({ty})"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'c> SchemaMatcher<dyn Candidate + 'c> for ArgumentsMatcher {
    fn evaluate(&mut self, candidate: &(dyn Candidate + 'c)) -> Result<bool, MatchError> {
        self.candidate = None;

        let Some(arguments) = candidate.members(CollectionKind::Arguments) else {
            warn!(matcher = "accept_arguments", "candidate exposes no arguments");
            return Err(MatchError::invalid_candidate(candidate, "accept_arguments"));
        };

        let matched = self.expected.iter().all(|(name, expected)| {
            resolve(arguments, name)
                .and_then(|argument| argument.member_type())
                .is_some_and(|actual| signature(actual) == *expected)
        });
        debug!(matcher = %self.describe(), matched, "arguments matcher evaluated");
        self.candidate = Some(display_name(candidate));
        Ok(matched)
    }

    fn describe(&self) -> String {
        format!("accept arguments {}", self.describe_arguments())
    }

    fn explain_failure(&self) -> String {
        format!(
            "expected field '{}' to accept arguments {}",
            self.candidate.as_deref().unwrap_or_default(),
            self.describe_arguments()
        )
    }

    fn explain_negated_failure(&self) -> String {
        format!(
            "expected field '{}' not to accept arguments {}",
            self.candidate.as_deref().unwrap_or_default(),
            self.describe_arguments()
        )
    }
}
