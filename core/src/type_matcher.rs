//! `TypeMatcher` — Standalone type assertion on a field or argument

use crate::{display_name, signature, Candidate, MatchError, SchemaMatcher, TypeLike};
use tracing::{debug, warn};

/// Matches a candidate whose type signature equals the expected one.
///
/// # Example
///
/// ```
/// use gqlmatch::prelude::*;
///
/// #[derive(Debug)]
/// struct Field(TypeRef);
///
/// impl Candidate for Field {
///     fn name(&self) -> Option<&str> {
///         Some("AField")
///     }
///
///     fn member_type(&self) -> Option<&dyn TypeLike> {
///         Some(&self.0)
///     }
/// }
///
/// let field = Field(TypeRef::named("Int"));
/// let mut matcher = be_of_type("String");
/// assert!(!matcher.evaluate(&field).unwrap());
/// assert_eq!(
///     matcher.explain_failure(),
///     "expected field 'AField' to be of type 'String', but it was 'Int'"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TypeMatcher {
    expected: String,
    sample: Option<Sample>,
}

#[derive(Debug, Clone)]
struct Sample {
    name: String,
    signature: String,
}

impl TypeMatcher {
    /// Match candidates of type `expected`.
    pub fn new<T: TypeLike + ?Sized>(expected: &T) -> Self {
        Self {
            expected: signature(expected),
            sample: None,
        }
    }

    /// The expected signature.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

impl<'c> SchemaMatcher<dyn Candidate + 'c> for TypeMatcher {
    fn evaluate(&mut self, candidate: &(dyn Candidate + 'c)) -> Result<bool, MatchError> {
        self.sample = None;

        let Some(member_type) = candidate.member_type() else {
            warn!(matcher = "be_of_type", "candidate exposes no type");
            return Err(MatchError::invalid_candidate(candidate, "be_of_type"));
        };
        let sample = Sample {
            name: display_name(candidate),
            signature: signature(member_type),
        };
        let matched = sample.signature == self.expected;
        debug!(
            expected = %self.expected,
            actual = %sample.signature,
            matched,
            "type matcher evaluated"
        );
        self.sample = Some(sample);
        Ok(matched)
    }

    fn describe(&self) -> String {
        format!("be of type '{}'", self.expected)
    }

    fn explain_failure(&self) -> String {
        match &self.sample {
            Some(sample) => format!(
                "expected field '{}' to be of type '{}', but it was '{}'",
                sample.name, self.expected, sample.signature
            ),
            None => format!("expected field to {}", self.describe()),
        }
    }

    fn explain_negated_failure(&self) -> String {
        match &self.sample {
            Some(sample) => format!(
                "expected field '{}' not to be of type '{}'",
                sample.name, self.expected
            ),
            None => format!("expected field not to {}", self.describe()),
        }
    }
}
