//! `MemberMatcher` — Find a named field or argument and check it
//!
//! One engine serves every member collection: fields, input fields, return
//! fields and arguments differ only in the [`CollectionKind`] selector.
//!
//! # Evaluation
//!
//! ```text
//! Unevaluated ──evaluate──▶ NotFound
//!                      └──▶ Found { failed expectations }
//! ```
//!
//! Every attached expectation is evaluated (no short-circuit); the first
//! failure in attachment order drives the explanation.

use crate::{
    display_name, resolve, Candidate, CollectionKind, MatchError, MemberExpectation, OfType,
    SchemaMatcher, TypeLike, WithDeprecationReason, WithHashKey, WithMetadata, WithProperty,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Matches a candidate that defines a member with the given name.
///
/// Built fluently: each `with_*` / `of_type` call appends one expectation and
/// returns the matcher.
///
/// # Example
///
/// ```
/// use gqlmatch::prelude::*;
///
/// let matcher = have_a_field("other")
///     .of_type("String")
///     .with_hash_key("other_on_hash")
///     .with_any_deprecation_reason();
///
/// assert_eq!(
///     matcher.describe(),
///     "define field `other`, of type `String`, with hash key `other_on_hash`, \
///      with a deprecation reason"
/// );
/// ```
#[derive(Debug)]
pub struct MemberMatcher {
    name: String,
    kind: CollectionKind,
    expectations: Vec<Box<dyn MemberExpectation>>,
    state: Evaluation,
}

#[derive(Debug, Clone)]
enum Evaluation {
    Unevaluated,
    NotFound { candidate: String },
    Found { candidate: String, failed: Vec<usize> },
}

impl MemberMatcher {
    /// Match a member named `name` in the collection selected by `kind`.
    pub fn new(name: impl Into<String>, kind: CollectionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            expectations: Vec::new(),
            state: Evaluation::Unevaluated,
        }
    }

    /// The requested member name, as given.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The collection this matcher reads.
    #[must_use]
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Attach any expectation.
    #[must_use]
    pub fn satisfying(mut self, expectation: impl MemberExpectation + 'static) -> Self {
        self.expectations.push(Box::new(expectation));
        self
    }

    /// Expect the member's type signature to equal `expected`.
    #[must_use]
    pub fn of_type(self, expected: impl TypeLike) -> Self {
        self.satisfying(OfType::new(&expected))
    }

    /// Alias for [`of_type`](Self::of_type).
    #[must_use]
    pub fn that_returns(self, expected: impl TypeLike) -> Self {
        self.of_type(expected)
    }

    /// Alias for [`of_type`](Self::of_type).
    #[must_use]
    pub fn returning(self, expected: impl TypeLike) -> Self {
        self.of_type(expected)
    }

    /// Expect the member to resolve from property `expected`.
    #[must_use]
    pub fn with_property(self, expected: impl Into<String>) -> Self {
        self.satisfying(WithProperty::new(expected))
    }

    /// Expect the member to resolve from hash key `expected`.
    #[must_use]
    pub fn with_hash_key(self, expected: impl Into<String>) -> Self {
        self.satisfying(WithHashKey::new(expected))
    }

    /// Expect the member's metadata to equal `expected`.
    #[must_use]
    pub fn with_metadata(self, expected: Value) -> Self {
        self.satisfying(WithMetadata::new(expected))
    }

    /// Expect the member to be deprecated for exactly `reason`.
    #[must_use]
    pub fn with_deprecation_reason(self, reason: impl Into<String>) -> Self {
        self.satisfying(WithDeprecationReason::new(Some(reason.into())))
    }

    /// Expect the member to be deprecated for any reason.
    #[must_use]
    pub fn with_any_deprecation_reason(self) -> Self {
        self.satisfying(WithDeprecationReason::new(None))
    }

    fn base_description(&self) -> String {
        format!("{} {} `{}`", self.kind.verb(), self.kind.noun(), self.name)
    }
}

impl<'c> SchemaMatcher<dyn Candidate + 'c> for MemberMatcher {
    fn evaluate(&mut self, candidate: &(dyn Candidate + 'c)) -> Result<bool, MatchError> {
        self.state = Evaluation::Unevaluated;

        let Some(collection) = candidate.members(self.kind) else {
            warn!(
                matcher = self.kind.matcher_name(),
                accessor = self.kind.accessor(),
                "candidate exposes no member collection"
            );
            return Err(MatchError::invalid_candidate(
                candidate,
                self.kind.matcher_name(),
            ));
        };
        let owner = display_name(candidate);

        let Some(member) = resolve(collection, &self.name) else {
            debug!(matcher = %self.describe(), candidate = %owner, "member not found");
            self.state = Evaluation::NotFound { candidate: owner };
            return Ok(false);
        };

        let mut failed = Vec::new();
        for (index, expectation) in self.expectations.iter_mut().enumerate() {
            if !expectation.matches(member)? {
                failed.push(index);
            }
        }

        let matched = failed.is_empty();
        debug!(
            matcher = %self.describe(),
            candidate = %owner,
            matched,
            failed = failed.len(),
            "member matcher evaluated"
        );
        self.state = Evaluation::Found {
            candidate: owner,
            failed,
        };
        Ok(matched)
    }

    fn describe(&self) -> String {
        std::iter::once(self.base_description())
            .chain(self.expectations.iter().map(|e| e.description()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn explain_failure(&self) -> String {
        let base = self.base_description();
        match &self.state {
            Evaluation::Unevaluated => format!("expected to {base}, but it was not evaluated"),
            Evaluation::NotFound { candidate } => format!(
                "expected {candidate} to {base} but no {} was found with that name",
                self.kind.noun()
            ),
            Evaluation::Found { candidate, failed } => match failed.first() {
                Some(&index) => format!(
                    "expected {candidate} to {base} {}",
                    self.expectations[index].explain()
                ),
                None => format!("expected {candidate} to {base}"),
            },
        }
    }

    fn explain_negated_failure(&self) -> String {
        match &self.state {
            Evaluation::Found { candidate, .. } | Evaluation::NotFound { candidate } => {
                format!("expected {candidate} not to {}", self.describe())
            }
            Evaluation::Unevaluated => format!("expected not to {}", self.describe()),
        }
    }
}
