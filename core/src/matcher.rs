//! `SchemaMatcher` — The evaluation protocol consumed by a test host
//!
//! A host builds a matcher, calls [`evaluate`](SchemaMatcher::evaluate) once
//! with the object under test, and on failure renders
//! [`explain_failure`](SchemaMatcher::explain_failure). Evaluation state lives
//! on the matcher instance; evaluating again overwrites it.

use crate::{Candidate, MatchError};
use std::fmt::Debug;

/// A matcher evaluated against one candidate of type `C` per assertion.
///
/// Schema matchers implement this for `dyn Candidate + 'c` over every
/// lifetime, so members borrowed out of a collection evaluate the same as
/// owned objects.
///
/// # INV: describe is pure
///
/// [`describe`](Self::describe) depends only on how the matcher was built. It
/// returns the same string before and after evaluation, whatever the outcome.
///
/// # Example
///
/// ```
/// use gqlmatch::prelude::*;
///
/// #[derive(Debug)]
/// struct NotAType;
/// impl Candidate for NotAType {}
///
/// let mut matcher = have_a_field("id");
/// let err = matcher.evaluate(&NotAType).unwrap_err();
/// assert!(matches!(err, MatchError::InvalidCandidate { matcher: "have_a_field", .. }));
/// ```
pub trait SchemaMatcher<C: ?Sized> {
    /// Evaluate against `candidate`.
    ///
    /// # Errors
    ///
    /// Returns a [`MatchError`] when the candidate is the wrong kind of object
    /// or a requested check cannot be performed. Ordinary mismatches are
    /// `Ok(false)`.
    fn evaluate(&mut self, candidate: &C) -> Result<bool, MatchError>;

    /// What this matcher expects, e.g. ``define field `id`, of type `ID!` ``.
    fn describe(&self) -> String;

    /// Why the last evaluation failed.
    fn explain_failure(&self) -> String;

    /// Why the last evaluation succeeded when it was expected not to.
    fn explain_negated_failure(&self) -> String {
        format!("expected not to {}", self.describe())
    }
}

/// A [`SchemaMatcher`] over schema objects, usable as a trait object.
///
/// Configuration-built matchers are returned as `Box<dyn ElementMatcher>`.
pub trait ElementMatcher: for<'c> SchemaMatcher<dyn Candidate + 'c> + Debug + Send + Sync {}

impl<M> ElementMatcher for M where
    M: for<'c> SchemaMatcher<dyn Candidate + 'c> + Debug + Send + Sync
{
}
