//! Config types for data-driven matcher construction.
//!
//! These types mirror the runtime matchers but are serde-deserializable, so an
//! assertion can be written as JSON or YAML and built at runtime.
//!
//! # Relationship to runtime types
//!
//! | Config variant | Runtime type | Constructor |
//! |----------------|--------------|-------------|
//! | `field` / `input_field` / `return_field` / `argument` | [`MemberMatcher`] | `have_a_field`, ... |
//! | `type` | [`TypeMatcher`] | `be_of_type` |
//! | `arguments` | [`ArgumentsMatcher`] | `accept_arguments` |
//! | `implement` | [`RelationMatcher`] | `implement` |
//! | [`ResultErrorConfig`] | [`ResultMatcher`] | `return_graphql_error` |

use crate::{
    ArgumentsMatcher, CollectionKind, ElementMatcher, ExpectedMessage, MatchError, MemberMatcher,
    RelationMatcher, ResultMatcher, TypeMatcher, TypeRef,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Configuration for any matcher over schema objects.
///
/// Uses `#[serde(tag = "type")]` for discriminated union deserialization:
///
/// ```json
/// { "type": "field", "name": "id", "of_type": "ID!" }
/// { "type": "argument", "name": "id", "with_deprecation_reason": true }
/// { "type": "type", "expected": "[String!]" }
/// { "type": "arguments", "arguments": { "id": "ID!", "age": "Int" } }
/// { "type": "implement", "interfaces": ["Node"] }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatcherConfig {
    /// `have_a_field`.
    Field(MemberConfig),

    /// `have_an_input_field`.
    InputField(MemberConfig),

    /// `have_a_return_field`.
    ReturnField(MemberConfig),

    /// `accept_argument`.
    Argument(MemberConfig),

    /// `be_of_type`.
    Type {
        /// Expected type signature.
        expected: String,
    },

    /// `accept_arguments`.
    Arguments {
        /// Expected argument name to type signature.
        arguments: BTreeMap<String, String>,
    },

    /// `implement`.
    Implement {
        /// Expected interface names.
        interfaces: Vec<String>,
    },
}

/// Configuration for a [`MemberMatcher`] and its sub-expectations.
///
/// Sub-expectations attach in a fixed order: type, property, hash key,
/// metadata, deprecation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberConfig {
    /// Member name, as the test would write it.
    pub name: String,

    /// Expected type signature.
    #[serde(default)]
    pub of_type: Option<String>,

    /// Expected resolving property.
    #[serde(default)]
    pub with_property: Option<String>,

    /// Expected hash key.
    #[serde(default)]
    pub with_hash_key: Option<String>,

    /// Expected metadata mapping.
    #[serde(default)]
    pub with_metadata: Option<Value>,

    /// Expected deprecation.
    #[serde(default)]
    pub with_deprecation_reason: Option<DeprecationConfig>,
}

/// Expected deprecation: `true` for any reason, or the exact reason.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DeprecationConfig {
    /// Presence only. `false` is rejected at build time.
    Any(bool),
    /// Exact reason.
    Reason(String),
}

impl MatcherConfig {
    /// Build the runtime matcher.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidConfig`] for unparsable type signatures,
    /// non-mapping metadata or `with_deprecation_reason: false`.
    pub fn build(&self) -> Result<Box<dyn ElementMatcher>, MatchError> {
        let matcher: Box<dyn ElementMatcher> = match self {
            Self::Field(member) => Box::new(member.build(CollectionKind::Fields)?),
            Self::InputField(member) => Box::new(member.build(CollectionKind::InputFields)?),
            Self::ReturnField(member) => Box::new(member.build(CollectionKind::ReturnFields)?),
            Self::Argument(member) => Box::new(member.build(CollectionKind::Arguments)?),
            Self::Type { expected } => Box::new(TypeMatcher::new(&parse_signature(expected)?)),
            Self::Arguments { arguments } => {
                let parsed = arguments
                    .iter()
                    .map(|(name, ty)| Ok((name.clone(), parse_signature(ty)?)))
                    .collect::<Result<Vec<_>, MatchError>>()?;
                Box::new(ArgumentsMatcher::new(parsed))
            }
            Self::Implement { interfaces } => Box::new(RelationMatcher::new(interfaces.clone())),
        };
        debug!(matcher = %matcher.describe(), "built matcher from config");
        Ok(matcher)
    }
}

impl MemberConfig {
    /// Build a [`MemberMatcher`] over the `kind` collection.
    ///
    /// # Errors
    ///
    /// See [`MatcherConfig::build`].
    pub fn build(&self, kind: CollectionKind) -> Result<MemberMatcher, MatchError> {
        let mut matcher = MemberMatcher::new(self.name.clone(), kind);
        if let Some(ty) = &self.of_type {
            matcher = matcher.of_type(parse_signature(ty)?);
        }
        if let Some(property) = &self.with_property {
            matcher = matcher.with_property(property.clone());
        }
        if let Some(key) = &self.with_hash_key {
            matcher = matcher.with_hash_key(key.clone());
        }
        if let Some(metadata) = &self.with_metadata {
            if !metadata.is_object() {
                return Err(MatchError::InvalidConfig {
                    reason: format!("with_metadata must be a mapping, got {metadata}"),
                });
            }
            matcher = matcher.with_metadata(metadata.clone());
        }
        match &self.with_deprecation_reason {
            None => {}
            Some(DeprecationConfig::Any(true)) => matcher = matcher.with_any_deprecation_reason(),
            Some(DeprecationConfig::Reason(reason)) => {
                matcher = matcher.with_deprecation_reason(reason.clone());
            }
            Some(DeprecationConfig::Any(false)) => {
                return Err(MatchError::InvalidConfig {
                    reason: "with_deprecation_reason must be true or a reason".to_string(),
                });
            }
        }
        Ok(matcher)
    }
}

/// Configuration for a [`ResultMatcher`].
///
/// At most one of `message` (exact) and `pattern` (regex) may be set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultErrorConfig {
    /// Exact error message.
    #[serde(default)]
    pub message: Option<String>,

    /// Error message regex.
    #[serde(default)]
    pub pattern: Option<String>,
}

impl ResultErrorConfig {
    /// Build the runtime matcher.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidConfig`] when both `message` and `pattern`
    /// are set, or [`MatchError::InvalidPattern`] when `pattern` does not compile.
    pub fn build(&self) -> Result<ResultMatcher, MatchError> {
        match (&self.message, &self.pattern) {
            (Some(_), Some(_)) => Err(MatchError::InvalidConfig {
                reason: "message and pattern are mutually exclusive".to_string(),
            }),
            (Some(message), None) => Ok(ResultMatcher::with_message(message.clone())),
            (None, Some(pattern)) => Ok(ResultMatcher::with_message(ExpectedMessage::pattern(
                pattern,
            )?)),
            (None, None) => Ok(ResultMatcher::new()),
        }
    }
}

fn parse_signature(s: &str) -> Result<TypeRef, MatchError> {
    s.parse()
}
