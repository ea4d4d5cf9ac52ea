//! gqlmatch - Composable assertion matchers for GraphQL schema introspection
//!
//! A library of matchers that verify properties of a schema object graph
//! (field presence, argument presence, type identity, implemented interfaces,
//! deprecation, custom metadata) and explain precisely what failed.
//!
//! # Architecture
//!
//! - [`Candidate`] — Capability interface every schema object is read through.
//!   Accessors default to "not exposed", so legacy and class-style schema
//!   objects are one trait with different probes answered.
//! - [`TypeLike`] / [`TypeRef`] — Type references normalized to a canonical
//!   signature (`[ID!]!`) before any comparison.
//! - [`camelize`] / [`resolve`] — Member lookup: exact name first, then the
//!   camel-cased name, nothing else.
//! - [`MemberExpectation`] — Independent checks attached to a member matcher
//!   ([`OfType`], [`WithProperty`], [`WithHashKey`], [`WithMetadata`],
//!   [`WithDeprecationReason`]).
//! - [`SchemaMatcher`] — The evaluation protocol a test host drives:
//!   `evaluate`, `describe`, `explain_failure`.
//!
//! # Key Design Insights
//!
//! 1. **Non-matches are values, misuse is an error**: `evaluate` returns
//!    `Ok(false)` when a member is missing or a check fails, and `Err` only when
//!    the wrong kind of object was passed in ([`MatchError::InvalidCandidate`])
//!    or a check needs an accessor the member lacks
//!    ([`MatchError::MissingCapability`]).
//!
//! 2. **Describe is pure**: [`SchemaMatcher::describe`] depends only on
//!    configuration, never on evaluation state.
//!
//! 3. **Absent expectation → skip**: an expected value of `None` makes a check
//!    pass instead of comparing against nothing.
//!
//! # Example
//!
//! ```
//! use gqlmatch::prelude::*;
//! use std::collections::BTreeMap;
//!
//! #[derive(Debug)]
//! struct Field { ty: TypeRef }
//!
//! impl Candidate for Field {
//!     fn member_type(&self) -> Option<&dyn TypeLike> {
//!         Some(&self.ty)
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct Object { fields: BTreeMap<String, Field> }
//!
//! impl Candidate for Object {
//!     fn graphql_name(&self) -> Option<&str> {
//!         Some("TestObject")
//!     }
//!
//!     fn members(&self, kind: CollectionKind) -> Option<&dyn MemberCollection> {
//!         match kind {
//!             CollectionKind::Fields => Some(&self.fields),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut fields = BTreeMap::new();
//! fields.insert("id".to_string(), Field { ty: TypeRef::named("ID").non_null() });
//! let object = Object { fields };
//!
//! let mut matcher = have_a_field("id").of_type("ID!");
//! assert!(matcher.evaluate(&object).unwrap());
//!
//! let mut matcher = have_a_field("id").of_type("ID");
//! assert!(!matcher.evaluate(&object).unwrap());
//! assert_eq!(
//!     matcher.explain_failure(),
//!     "expected TestObject to define field `id` of type `ID`, but it was `ID!`"
//! );
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod arguments_matcher;
mod candidate;
mod expectation;
mod matcher;
mod member_matcher;
mod name_resolver;
mod relation_matcher;
mod result_matcher;
mod type_identity;
mod type_matcher;

#[cfg(feature = "config")]
mod config;

pub mod matchers;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use candidate::{display_name, Candidate, CollectionKind, MemberCollection};
pub use matcher::{ElementMatcher, SchemaMatcher};
pub use name_resolver::{camelize, resolve};
pub use type_identity::{signature, signatures_equal, TypeLike, TypeRef};

// Concrete matchers
pub use arguments_matcher::ArgumentsMatcher;
pub use member_matcher::MemberMatcher;
pub use relation_matcher::RelationMatcher;
pub use result_matcher::{ExpectedMessage, ResultMatcher};
pub use type_matcher::TypeMatcher;

// Sub-expectations
pub use expectation::{
    MemberExpectation, OfType, WithDeprecationReason, WithHashKey, WithMetadata, WithProperty,
};

// Config (feature-gated)
#[cfg(feature = "config")]
pub use config::{DeprecationConfig, MatcherConfig, MemberConfig, ResultErrorConfig};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// Brings the matcher constructors from [`matchers`] into scope together with
/// the traits needed to evaluate them.
///
/// ```
/// use gqlmatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::matchers::*;
    pub use crate::{
        // Core types
        Candidate,
        CollectionKind,
        ElementMatcher,
        // Errors
        MatchError,
        MemberCollection,
        MemberExpectation,
        SchemaMatcher,
        TypeLike,
        TypeRef,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Fatal errors raised during matcher construction or evaluation.
///
/// These are never an ordinary non-match. A missing member or a failed
/// sub-expectation yields `Ok(false)` plus an explanation; a `MatchError`
/// means the test itself is misconfigured and should error out loudly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The candidate does not expose the collection or relation the matcher reads.
    #[error(
        "Invalid object {candidate} provided to {matcher} matcher. \
         It does not seem to be a valid GraphQL object type."
    )]
    InvalidCandidate {
        /// Display name of the object that was passed in.
        candidate: String,
        /// User-facing matcher name (`have_a_field`, `implement`, ...).
        matcher: &'static str,
    },

    /// A member was found but lacks the accessor a sub-expectation needs.
    #[error("{member} does not expose a {capability}, required to check it {expectation}")]
    MissingCapability {
        /// `Debug` representation of the offending member.
        member: String,
        /// The accessor concept that is missing (`"type"`, `"property"`, ...).
        capability: &'static str,
        /// Description of the sub-expectation that needed it.
        expectation: String,
    },

    /// A regex pattern failed to compile.
    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern {
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying error message.
        reason: String,
    },

    /// Matcher configuration could not be turned into a matcher.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// The underlying error message.
        reason: String,
    },
}

impl MatchError {
    pub(crate) fn invalid_candidate<C: Candidate + ?Sized>(
        candidate: &C,
        matcher: &'static str,
    ) -> Self {
        Self::InvalidCandidate {
            candidate: display_name(candidate),
            matcher,
        }
    }

    pub(crate) fn missing_capability<C: Candidate + ?Sized>(
        member: &C,
        capability: &'static str,
        expectation: String,
    ) -> Self {
        Self::MissingCapability {
            member: format!("{member:?}"),
            capability,
            expectation,
        }
    }
}
