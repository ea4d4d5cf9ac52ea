//! `ResultMatcher` — Execution results that carry a GraphQL error

use crate::{MatchError, SchemaMatcher};
use regex::Regex;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// The message an error entry must carry.
#[derive(Debug, Clone)]
pub enum ExpectedMessage {
    /// Exact string equality.
    Literal(String),
    /// Unanchored regex search.
    Pattern(Regex),
}

impl ExpectedMessage {
    /// Compile `pattern` into an [`ExpectedMessage::Pattern`].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPattern`] if the regex does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, MatchError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| MatchError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    fn accepts(&self, message: &str) -> bool {
        match self {
            Self::Literal(expected) => message == expected,
            Self::Pattern(regex) => regex.is_match(message),
        }
    }
}

impl fmt::Display for ExpectedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl From<&str> for ExpectedMessage {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for ExpectedMessage {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<Regex> for ExpectedMessage {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

/// Matches a resolved execution result that contains at least one error.
///
/// The candidate is the JSON result mapping. With an expected message, some
/// entry of its `errors` list must carry a matching `message`.
///
/// # Example
///
/// ```
/// use gqlmatch::prelude::*;
/// use serde_json::json;
///
/// let result = json!({"errors": [{"message": "boom"}]});
/// assert!(return_graphql_error().evaluate(&result).unwrap());
///
/// let mut matcher = return_graphql_error_with_message("nope");
/// assert!(!matcher.evaluate(&result).unwrap());
/// assert_eq!(
///     matcher.explain_failure(),
///     "Expected result to have an error message `nope`, but the error messages were: `[\"boom\"]`"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResultMatcher {
    expected: Option<ExpectedMessage>,
    outcome: Option<Outcome>,
}

#[derive(Debug, Clone)]
enum Outcome {
    NoErrors { result: String },
    Errors { messages: Vec<Value> },
}

impl ResultMatcher {
    /// Match any result with errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match a result with an error whose message is `expected`.
    pub fn with_message(expected: impl Into<ExpectedMessage>) -> Self {
        Self {
            expected: Some(expected.into()),
            outcome: None,
        }
    }

    /// Match a result with an error whose message matches the regex `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidPattern`] if the regex does not compile.
    pub fn matching(pattern: &str) -> Result<Self, MatchError> {
        Ok(Self::with_message(ExpectedMessage::pattern(pattern)?))
    }

    /// The expected message, if any.
    #[must_use]
    pub fn expected(&self) -> Option<&ExpectedMessage> {
        self.expected.as_ref()
    }
}

impl SchemaMatcher<Value> for ResultMatcher {
    fn evaluate(&mut self, result: &Value) -> Result<bool, MatchError> {
        let errors = match result.get("errors") {
            Some(Value::Array(errors)) if !errors.is_empty() => errors,
            _ => {
                debug!(matcher = %self.describe(), "result has no errors");
                self.outcome = Some(Outcome::NoErrors {
                    result: result.to_string(),
                });
                return Ok(false);
            }
        };

        let messages: Vec<Value> = errors
            .iter()
            .map(|error| error.get("message").cloned().unwrap_or(Value::Null))
            .collect();
        let matched = match &self.expected {
            None => true,
            Some(expected) => messages
                .iter()
                .filter_map(Value::as_str)
                .any(|message| expected.accepts(message)),
        };
        debug!(
            matcher = %self.describe(),
            errors = messages.len(),
            matched,
            "result matcher evaluated"
        );
        self.outcome = Some(Outcome::Errors { messages });
        Ok(matched)
    }

    fn describe(&self) -> String {
        match &self.expected {
            None => "return a GraphQL error".to_string(),
            Some(m @ ExpectedMessage::Literal(_)) => {
                format!("return a GraphQL error with message `{m}`")
            }
            Some(m @ ExpectedMessage::Pattern(_)) => format!("return a GraphQL error matching {m}"),
        }
    }

    fn explain_failure(&self) -> String {
        match (&self.outcome, &self.expected) {
            (Some(Outcome::NoErrors { result }), Some(expected)) => format!(
                "Expected to find an error with message `{expected}`, \
                 but there were no errors in: `{result}`"
            ),
            (Some(Outcome::NoErrors { .. }), None) => {
                "Expected to find errors, but there were no errors.".to_string()
            }
            (Some(Outcome::Errors { messages }), Some(expected)) => format!(
                "Expected result to have an error message `{expected}`, \
                 but the error messages were: `{}`",
                Value::Array(messages.clone())
            ),
            (Some(Outcome::Errors { .. }), None) | (None, _) => {
                format!("expected result to {}", self.describe())
            }
        }
    }

    fn explain_negated_failure(&self) -> String {
        match &self.outcome {
            Some(Outcome::Errors { messages }) => format!(
                "expected result not to {}, but the error messages were: `{}`",
                self.describe(),
                Value::Array(messages.clone())
            ),
            _ => format!("expected result not to {}", self.describe()),
        }
    }
}
