//! `RelationMatcher` — Declared interfaces are a superset of the expected ones

use crate::{display_name, Candidate, MatchError, SchemaMatcher};
use tracing::{debug, warn};

/// Matches a candidate that implements every expected interface.
///
/// Subset check: extra interfaces on the candidate never cause a failure.
/// Interface names come from each interface's display name.
///
/// # Example
///
/// ```
/// use gqlmatch::prelude::*;
///
/// #[derive(Debug)]
/// struct Interface(&'static str);
/// impl Candidate for Interface {
///     fn graphql_name(&self) -> Option<&str> {
///         Some(self.0)
///     }
/// }
///
/// #[derive(Debug)]
/// struct Object(Vec<Interface>);
/// impl Candidate for Object {
///     fn interfaces(&self) -> Option<Vec<&dyn Candidate>> {
///         Some(self.0.iter().map(|i| i as &dyn Candidate).collect())
///     }
/// }
///
/// let object = Object(vec![Interface("Node"), Interface("Foo")]);
/// assert!(implement(["Foo"]).evaluate(&object).unwrap());
///
/// let mut matcher = implement(["Bar"]);
/// assert!(!matcher.evaluate(&object).unwrap());
/// assert_eq!(
///     matcher.explain_failure(),
///     "expected interfaces: Bar\nactual interfaces:   Node, Foo"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RelationMatcher {
    expected: Vec<String>,
    actual: Option<Vec<String>>,
}

impl RelationMatcher {
    /// Expect the interfaces named in `names`.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            expected: names.into_iter().map(Into::into).collect(),
            actual: None,
        }
    }

    /// Expect the given interface objects, identified by their display names.
    #[must_use]
    pub fn of_interfaces(interfaces: &[&dyn Candidate]) -> Self {
        Self::new(interfaces.iter().map(|i| display_name(*i)))
    }

    /// The expected interface names.
    #[must_use]
    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    fn actual_list(&self) -> String {
        self.actual.as_deref().unwrap_or_default().join(", ")
    }
}

impl<'c> SchemaMatcher<dyn Candidate + 'c> for RelationMatcher {
    fn evaluate(&mut self, candidate: &(dyn Candidate + 'c)) -> Result<bool, MatchError> {
        self.actual = None;

        let Some(interfaces) = candidate.interfaces() else {
            warn!(matcher = "implement", "candidate exposes no interfaces");
            return Err(MatchError::invalid_candidate(candidate, "implement"));
        };
        let actual: Vec<String> = interfaces.into_iter().map(display_name).collect();

        let matched = self.expected.iter().all(|name| actual.contains(name));
        debug!(
            expected = ?self.expected,
            actual = ?actual,
            matched,
            "relation matcher evaluated"
        );
        self.actual = Some(actual);
        Ok(matched)
    }

    fn describe(&self) -> String {
        format!("implement {}", self.expected.join(", "))
    }

    fn explain_failure(&self) -> String {
        format!(
            "expected interfaces: {}\nactual interfaces:   {}",
            self.expected.join(", "),
            self.actual_list()
        )
    }

    fn explain_negated_failure(&self) -> String {
        format!(
            "unexpected interfaces: {}\nactual interfaces:     {}",
            self.expected.join(", "),
            self.actual_list()
        )
    }
}
