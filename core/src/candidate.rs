//! `Candidate` — Capability interface for schema objects under test
//!
//! Matchers never depend on a concrete schema model. They probe a candidate
//! through accessors that each answer "not exposed" by default, so an object
//! only implements what its definition style actually offers.
//!
//! This is how two historically divergent styles coexist: a legacy
//! `define`-style field answers [`Candidate::property`], a class-style field
//! answers [`Candidate::hash_key`] and [`Candidate::method_sym`] instead, and the
//! matchers fall back from one accessor to the other.

use crate::TypeLike;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::BuildHasher;

/// Which member collection of a candidate a member matcher reads.
///
/// All kinds share the same matcher logic; they only select a different
/// accessor on the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CollectionKind {
    /// Output fields of an object or interface type.
    Fields,
    /// Fields of an input object type.
    InputFields,
    /// Fields of a mutation payload.
    ReturnFields,
    /// Arguments of a field or input object.
    Arguments,
}

impl CollectionKind {
    /// Accessor name on the candidate (`"fields"`, `"input_fields"`, ...).
    #[must_use]
    pub fn accessor(self) -> &'static str {
        match self {
            Self::Fields => "fields",
            Self::InputFields => "input_fields",
            Self::ReturnFields => "return_fields",
            Self::Arguments => "arguments",
        }
    }

    /// User-facing matcher name reported in [`MatchError::InvalidCandidate`](crate::MatchError::InvalidCandidate).
    #[must_use]
    pub fn matcher_name(self) -> &'static str {
        match self {
            Self::Fields => "have_a_field",
            Self::InputFields => "have_an_input_field",
            Self::ReturnFields => "have_a_return_field",
            Self::Arguments => "accept_argument",
        }
    }

    /// Singular noun for a member of this collection.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Arguments => "argument",
            _ => "field",
        }
    }

    pub(crate) fn verb(self) -> &'static str {
        match self {
            Self::Arguments => "accept",
            _ => "define",
        }
    }
}

/// An object a matcher can inspect: a type, a field, an argument or an interface.
///
/// Every accessor returns `None` when the object does not expose it. Matchers
/// distinguish "not exposed" (a fatal [`MatchError`](crate::MatchError)) from
/// "exposed but different" (an ordinary non-match).
///
/// # Example
///
/// ```
/// use gqlmatch::{Candidate, TypeLike, TypeRef};
///
/// #[derive(Debug)]
/// struct Argument { name: String, ty: TypeRef }
///
/// impl Candidate for Argument {
///     fn name(&self) -> Option<&str> {
///         Some(&self.name)
///     }
///
///     fn member_type(&self) -> Option<&dyn TypeLike> {
///         Some(&self.ty)
///     }
/// }
///
/// let arg = Argument { name: "id".into(), ty: TypeRef::named("ID") };
/// assert_eq!(gqlmatch::display_name(&arg), "id");
/// assert!(arg.property().is_none());
/// ```
pub trait Candidate: Debug {
    /// Declared GraphQL name, preferred for display.
    fn graphql_name(&self) -> Option<&str> {
        None
    }

    /// Host-language name, used for display when there is no GraphQL name.
    fn name(&self) -> Option<&str> {
        None
    }

    /// The member collection of the given kind.
    ///
    /// `None` means this object has no such collection at all, which member
    /// matchers report as [`MatchError::InvalidCandidate`](crate::MatchError::InvalidCandidate).
    fn members(&self, kind: CollectionKind) -> Option<&dyn MemberCollection> {
        let _ = kind;
        None
    }

    /// Interfaces this object declares it implements.
    fn interfaces(&self) -> Option<Vec<&dyn Candidate>> {
        None
    }

    /// The type of a field or argument.
    fn member_type(&self) -> Option<&dyn TypeLike> {
        None
    }

    /// Explicit property the member resolves from (legacy style).
    fn property(&self) -> Option<&str> {
        None
    }

    /// Hash key the member resolves from (class style).
    fn hash_key(&self) -> Option<&str> {
        None
    }

    /// Method the member resolves through when no property or hash key is declared.
    fn method_sym(&self) -> Option<&str> {
        None
    }

    /// Custom metadata attached to the member.
    fn metadata(&self) -> Option<&Map<String, Value>> {
        None
    }

    /// Deprecation reason, `None` when the member is not deprecated.
    fn deprecation_reason(&self) -> Option<&str> {
        None
    }
}

/// Human-readable name of a candidate for messages.
///
/// Uses the GraphQL name, then the plain name, then the `Debug` representation.
pub fn display_name<C: Candidate + ?Sized>(candidate: &C) -> String {
    candidate
        .graphql_name()
        .or_else(|| candidate.name())
        .map_or_else(|| format!("{candidate:?}"), str::to_string)
}

/// A named collection of members, looked up by exact key.
pub trait MemberCollection {
    /// The member stored under exactly `name`, if any.
    fn member(&self, name: &str) -> Option<&dyn Candidate>;
}

impl<M: Candidate> MemberCollection for BTreeMap<String, M> {
    fn member(&self, name: &str) -> Option<&dyn Candidate> {
        self.get(name).map(|m| m as &dyn Candidate)
    }
}

impl<M: Candidate, S: BuildHasher> MemberCollection for HashMap<String, M, S> {
    fn member(&self, name: &str) -> Option<&dyn Candidate> {
        self.get(name).map(|m| m as &dyn Candidate)
    }
}
