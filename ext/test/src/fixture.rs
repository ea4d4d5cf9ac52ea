//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the sample schemas.
//!
//! ```yaml
//! name: have_a_field
//! description: Field lookup by either casing
//! subject: field_object
//! cases:
//!   - name: underscored name
//!     matcher: { type: field, name: is_test }
//!     expect: true
//!   - name: missing field
//!     matcher: { type: field, name: ids }
//!     expect: false
//!     explanation: expected TestObject to define field `ids` but no field was found with that name
//! ```
//!
//! Every fixture runs once per style listed in `styles` (both by default).

use crate::{sample, Opaque, Style, TestObject};
use gqlmatch::{
    Candidate, CollectionKind, MatchError, MatcherConfig, ResultErrorConfig, SchemaMatcher,
};
use serde::Deserialize;
use serde_json::Value;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub subject: Option<Subject>,
    #[serde(default = "both_styles")]
    pub styles: Vec<Style>,
    pub cases: Vec<TestCase>,
}

fn both_styles() -> Vec<Style> {
    vec![Style::Class, Style::Legacy]
}

/// Which sample schema a fixture evaluates against
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    FieldObject,
    InterfaceFieldObject,
    ArgumentObject,
    SomeInputObject,
    InterfaceObject,
    Mutation,
    Query,
    Opaque,
}

enum Built {
    Schema(TestObject),
    Opaque(Opaque),
}

impl Subject {
    fn build(self, style: Style) -> Built {
        Built::Schema(match self {
            Self::FieldObject => sample::field_object(style),
            Self::InterfaceFieldObject => sample::interface_field_object(style),
            Self::ArgumentObject => sample::argument_object(style),
            Self::SomeInputObject => sample::some_input_object(style),
            Self::InterfaceObject => sample::interface_object(style),
            Self::Mutation => sample::mutation(style),
            Self::Query => sample::query(style),
            Self::Opaque => return Built::Opaque(Opaque::new("InvalidObject")),
        })
    }
}

impl Built {
    fn candidate(&self) -> &dyn Candidate {
        match self {
            Self::Schema(object) => object as &dyn Candidate,
            Self::Opaque(opaque) => opaque as &dyn Candidate,
        }
    }
}

/// Test case
///
/// Exactly one of `matcher` (against the subject) or `result_matcher`
/// (against `result`) is given. `error` expects a fatal error with that
/// message instead of a boolean.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestCase {
    pub name: String,
    #[serde(default)]
    pub matcher: Option<MatcherConfig>,
    /// Evaluate against this field of the subject instead of the subject.
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub result_matcher: Option<ResultErrorConfig>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub styles: Option<Vec<Style>>,
    #[serde(default)]
    pub expect: Option<bool>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// What a case evaluated to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Matched(bool, String),
    Failed(String),
}

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub style: Style,
    pub passed: bool,
    pub outcome: Outcome,
}

impl TestCase {
    fn applies_to(&self, style: Style) -> bool {
        self.styles.as_ref().map_or(true, |s| s.contains(&style))
    }

    fn evaluate(&self, subject: Option<&Built>) -> Result<Outcome, String> {
        let outcome = |r: Result<(bool, String), MatchError>| match r {
            Ok((matched, explanation)) => Outcome::Matched(matched, explanation),
            Err(e) => Outcome::Failed(e.to_string()),
        };

        if let Some(config) = &self.result_matcher {
            let result = self.result.as_ref().ok_or("result_matcher needs a result")?;
            return Ok(outcome(config.build().and_then(|mut m| run(&mut m, result))));
        }

        let config = self.matcher.as_ref().ok_or("case needs a matcher")?;
        let subject = subject.ok_or("matcher case needs a subject")?.candidate();
        let candidate = match &self.field {
            None => subject,
            Some(name) => subject
                .members(CollectionKind::Fields)
                .or_else(|| subject.members(CollectionKind::Arguments))
                .and_then(|members| members.member(name))
                .ok_or_else(|| format!("subject has no member {name}"))?,
        };
        Ok(outcome(
            config.build().and_then(|mut m| run(&mut *m, candidate)),
        ))
    }

    fn check(&self, outcome: &Outcome) -> bool {
        match (outcome, &self.error) {
            (Outcome::Failed(message), Some(expected)) => message == expected,
            (Outcome::Matched(matched, explanation), None) => {
                self.expect == Some(*matched)
                    && self
                        .explanation
                        .as_ref()
                        .map_or(true, |expected| expected == explanation)
            }
            _ => false,
        }
    }
}

/// Evaluate and pick the explanation a host would show for the outcome.
fn run<M, C>(matcher: &mut M, candidate: &C) -> Result<(bool, String), MatchError>
where
    M: SchemaMatcher<C> + ?Sized,
    C: ?Sized,
{
    let matched = matcher.evaluate(candidate)?;
    let explanation = if matched {
        matcher.explain_negated_failure()
    } else {
        matcher.explain_failure()
    };
    Ok((matched, explanation))
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases in every style and return results
    ///
    /// # Panics
    ///
    /// Panics if a case is malformed (no matcher, no subject, unknown field).
    pub fn run(&self) -> Vec<CaseResult> {
        let mut results = Vec::new();
        for &style in &self.styles {
            let subject = self.subject.map(|s| s.build(style));
            for case in self.cases.iter().filter(|c| c.applies_to(style)) {
                let outcome = case.evaluate(subject.as_ref()).unwrap_or_else(|e| {
                    panic!("Fixture '{}' case '{}' is malformed: {e}", self.name, case.name)
                });
                results.push(CaseResult {
                    case_name: case.name.clone(),
                    style,
                    passed: case.check(&outcome),
                    outcome,
                });
            }
        }
        results
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        for result in self.run() {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' ({} style) failed: got {:?}",
                self.name, result.case_name, result.style, result.outcome
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_cases_in_both_styles() {
        let yaml = r#"
name: smoke
description: one passing case
subject: field_object
cases:
  - name: id
    matcher: { type: field, name: id, of_type: "ID!" }
    expect: true
"#;
        let fixture = Fixture::from_yaml(yaml).unwrap();
        let results = fixture.run();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
    }

    #[test]
    fn wrong_explanation_fails_the_case() {
        let yaml = r#"
name: smoke
description: explanation mismatch
subject: field_object
styles: [class]
cases:
  - name: ids
    matcher: { type: field, name: ids }
    expect: false
    explanation: something else
"#;
        let results = Fixture::from_yaml(yaml).unwrap().run();
        assert!(!results[0].passed);
    }

    #[test]
    fn field_cases_evaluate_the_borrowed_member() {
        let yaml = r#"
name: member
description: matchers against a member of the subject
subject: query
cases:
  - name: users type
    field: users
    matcher: { type: type, expected: "[User!]!" }
    expect: true
  - name: users arguments
    field: users
    matcher: { type: argument, name: order_by, of_type: "[UserOrder!]" }
    expect: true
  - name: missing argument
    field: users
    matcher: { type: argument, name: last }
    expect: false
"#;
        let results = Fixture::from_yaml(yaml).unwrap().run();
        assert_eq!(results.len(), 6);
        for result in results {
            assert!(
                result.passed,
                "{} ({}): {:?}",
                result.case_name, result.style, result.outcome
            );
        }
    }

    #[test]
    fn result_cases_need_no_subject() {
        let yaml = r#"
name: result
description: result matcher
cases:
  - name: boom
    result_matcher: {}
    result: { errors: [{ message: boom }] }
    expect: true
---
name: result negative
description: result matcher without errors
cases:
  - name: none
    result_matcher: { message: boom }
    result: { data: {} }
    expect: false
"#;
        let fixtures = Fixture::from_yaml_multi(yaml).unwrap();
        assert_eq!(fixtures.len(), 2);
        for fixture in fixtures {
            fixture.run_and_assert();
        }
    }
}
