//! `MemberExpectation` — Independent checks attached to a member matcher
//!
//! Each expectation holds its expected value, captures the actual value when
//! evaluated, and can describe itself before or after evaluation.
//!
//! # Available Expectations
//!
//! - [`OfType`] — Type signature equality
//! - [`WithProperty`] — Property the member resolves from
//! - [`WithHashKey`] — Hash key the member resolves from
//! - [`WithMetadata`] — Deep equality of attached metadata
//! - [`WithDeprecationReason`] — Deprecated, optionally with an exact reason

use crate::{signature, Candidate, MatchError, TypeLike};
use serde_json::Value;
use std::fmt::Debug;
use tracing::trace;

/// A check run against a member once the member matcher has found it.
///
/// `matches` returns `Ok(false)` for an ordinary mismatch and
/// [`MatchError::MissingCapability`] when the member does not expose the
/// accessor the check reads.
///
/// # Example
///
/// ```
/// use gqlmatch::{Candidate, MemberExpectation, WithDeprecationReason};
///
/// #[derive(Debug)]
/// struct Field;
/// impl Candidate for Field {
///     fn deprecation_reason(&self) -> Option<&str> {
///         Some("use `node` instead")
///     }
/// }
///
/// let mut expectation = WithDeprecationReason::new(Some("gone".into()));
/// assert!(!expectation.matches(&Field).unwrap());
/// assert_eq!(
///     expectation.explain(),
///     "with deprecation reason `gone`, but it was `use `node` instead`"
/// );
/// ```
pub trait MemberExpectation: Send + Sync + Debug {
    /// Evaluate against `member`, capturing the actual value for [`explain`](Self::explain).
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MissingCapability`] when `member` lacks the accessor
    /// this expectation needs.
    fn matches(&mut self, member: &dyn Candidate) -> Result<bool, MatchError>;

    /// What this expectation requires, independent of any evaluation.
    fn description(&self) -> String;

    /// Description plus the captured actual value. Meaningful after [`matches`](Self::matches).
    fn explain(&self) -> String;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Type
// ═══════════════════════════════════════════════════════════════════════════════

/// Member type signature equality.
///
/// An absent expected type is skipped: the check passes without reading the member.
#[derive(Debug, Clone)]
pub struct OfType {
    expected: Option<String>,
    actual: Option<String>,
}

impl OfType {
    /// Expect a type, normalized to its signature.
    pub fn new<T: TypeLike + ?Sized>(expected: &T) -> Self {
        Self {
            expected: Some(signature(expected)),
            actual: None,
        }
    }

    /// No expected type; always passes.
    #[must_use]
    pub fn any() -> Self {
        Self {
            expected: None,
            actual: None,
        }
    }

    /// The expected signature, if any.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }
}

impl MemberExpectation for OfType {
    fn matches(&mut self, member: &dyn Candidate) -> Result<bool, MatchError> {
        let Some(expected) = &self.expected else {
            return Ok(true);
        };
        let member_type = member
            .member_type()
            .ok_or_else(|| MatchError::missing_capability(member, "type", self.description()))?;
        let actual = signature(member_type);
        trace!(expected = %expected, actual = %actual, "comparing type signatures");
        let matched = actual == *expected;
        self.actual = Some(actual);
        Ok(matched)
    }

    fn description(&self) -> String {
        match &self.expected {
            Some(expected) => format!("of type `{expected}`"),
            None => "of any type".to_string(),
        }
    }

    fn explain(&self) -> String {
        format!(
            "{}, but it was `{}`",
            self.description(),
            self.actual.as_deref().unwrap_or_default()
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Resolution source: property and hash key
// ═══════════════════════════════════════════════════════════════════════════════

/// The property a member resolves from.
///
/// Reads [`Candidate::property`], falling back to [`Candidate::method_sym`]
/// for members that declare no explicit property.
#[derive(Debug, Clone)]
pub struct WithProperty {
    expected: String,
    actual: Option<String>,
}

impl WithProperty {
    /// Expect the member to resolve from `expected`.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: None,
        }
    }
}

impl MemberExpectation for WithProperty {
    fn matches(&mut self, member: &dyn Candidate) -> Result<bool, MatchError> {
        let actual = member
            .property()
            .or_else(|| member.method_sym())
            .ok_or_else(|| {
                MatchError::missing_capability(member, "property", self.description())
            })?;
        trace!(expected = %self.expected, actual, "comparing properties");
        let matched = actual == self.expected;
        self.actual = Some(actual.to_string());
        Ok(matched)
    }

    fn description(&self) -> String {
        format!("resolving with property `{}`", self.expected)
    }

    fn explain(&self) -> String {
        format!(
            "{}, but it was `{}`",
            self.description(),
            self.actual.as_deref().unwrap_or_default()
        )
    }
}

/// The hash key a member resolves from.
///
/// Reads [`Candidate::hash_key`], falling back to [`Candidate::method_sym`]
/// for members that declare no hash key.
#[derive(Debug, Clone)]
pub struct WithHashKey {
    expected: String,
    actual: Option<String>,
}

impl WithHashKey {
    /// Expect the member to resolve from hash key `expected`.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: None,
        }
    }
}

impl MemberExpectation for WithHashKey {
    fn matches(&mut self, member: &dyn Candidate) -> Result<bool, MatchError> {
        let actual = member
            .hash_key()
            .or_else(|| member.method_sym())
            .ok_or_else(|| {
                MatchError::missing_capability(member, "hash key", self.description())
            })?;
        trace!(expected = %self.expected, actual, "comparing hash keys");
        let matched = actual == self.expected;
        self.actual = Some(actual.to_string());
        Ok(matched)
    }

    fn description(&self) -> String {
        format!("with hash key `{}`", self.expected)
    }

    fn explain(&self) -> String {
        format!(
            "{}, but it was `{}`",
            self.description(),
            self.actual.as_deref().unwrap_or_default()
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Metadata
// ═══════════════════════════════════════════════════════════════════════════════

/// Deep equality of the member's metadata mapping. Key order is irrelevant.
#[derive(Debug, Clone)]
pub struct WithMetadata {
    expected: Value,
    actual: Option<Value>,
}

impl WithMetadata {
    /// Expect exactly this metadata (normally a JSON object).
    #[must_use]
    pub fn new(expected: Value) -> Self {
        Self {
            expected,
            actual: None,
        }
    }
}

impl MemberExpectation for WithMetadata {
    fn matches(&mut self, member: &dyn Candidate) -> Result<bool, MatchError> {
        let actual = member.metadata().ok_or_else(|| {
            MatchError::missing_capability(member, "metadata mapping", self.description())
        })?;
        let actual = Value::Object(actual.clone());
        trace!(expected = %self.expected, actual = %actual, "comparing metadata");
        let matched = actual == self.expected;
        self.actual = Some(actual);
        Ok(matched)
    }

    fn description(&self) -> String {
        format!("with metadata `{}`", self.expected)
    }

    fn explain(&self) -> String {
        format!(
            "{}, but it was `{}`",
            self.description(),
            self.actual.as_ref().unwrap_or(&Value::Null)
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Deprecation
// ═══════════════════════════════════════════════════════════════════════════════

/// Deprecation status.
///
/// Without an expected reason, any non-empty reason passes. With one, the
/// actual reason must equal it exactly.
#[derive(Debug, Clone)]
pub struct WithDeprecationReason {
    expected: Option<String>,
    actual: Option<String>,
}

impl WithDeprecationReason {
    /// Expect a deprecation, with `expected` as the exact reason when given.
    #[must_use]
    pub fn new(expected: Option<String>) -> Self {
        Self {
            expected,
            actual: None,
        }
    }
}

impl MemberExpectation for WithDeprecationReason {
    fn matches(&mut self, member: &dyn Candidate) -> Result<bool, MatchError> {
        self.actual = member.deprecation_reason().map(str::to_string);
        trace!(expected = ?self.expected, actual = ?self.actual, "comparing deprecation");
        Ok(match &self.expected {
            None => self.actual.as_ref().is_some_and(|reason| !reason.is_empty()),
            Some(expected) => self.actual.as_ref() == Some(expected),
        })
    }

    fn description(&self) -> String {
        match &self.expected {
            None => "with a deprecation reason".to_string(),
            Some(expected) => format!("with deprecation reason `{expected}`"),
        }
    }

    fn explain(&self) -> String {
        match self.actual.as_deref().filter(|reason| !reason.is_empty()) {
            None => format!("{}, but it was not deprecated", self.description()),
            Some(actual) => format!("{}, but it was `{actual}`", self.description()),
        }
    }
}
