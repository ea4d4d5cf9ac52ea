//! Matcher constructors, imported per test file
//!
//! The generic constructors (`type_matcher`, `member_matcher`, ...) take every
//! parameter explicitly. The assertion-style names (`have_a_field`,
//! `implement`, ...) read naturally at the call site and fix the collection.

use crate::{
    ArgumentsMatcher, Candidate, CollectionKind, ExpectedMessage, MatchError, MemberMatcher,
    RelationMatcher, ResultMatcher, TypeLike, TypeMatcher,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Generic constructors
// ═══════════════════════════════════════════════════════════════════════════════

/// Match a candidate whose type signature equals `expected`.
pub fn type_matcher<T: TypeLike + ?Sized>(expected: &T) -> TypeMatcher {
    TypeMatcher::new(expected)
}

/// Match a candidate defining member `name` in the `kind` collection.
pub fn member_matcher(name: impl Into<String>, kind: CollectionKind) -> MemberMatcher {
    MemberMatcher::new(name, kind)
}

/// Match a candidate accepting argument `name`.
pub fn argument_matcher(name: impl Into<String>) -> MemberMatcher {
    MemberMatcher::new(name, CollectionKind::Arguments)
}

/// Match a candidate implementing every interface in `names`.
pub fn relation_matcher<I>(names: I) -> RelationMatcher
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    RelationMatcher::new(names)
}

/// Match a result with errors, optionally carrying `expected`.
pub fn result_error_matcher(expected: Option<ExpectedMessage>) -> ResultMatcher {
    match expected {
        Some(expected) => ResultMatcher::with_message(expected),
        None => ResultMatcher::new(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Assertion-style constructors
// ═══════════════════════════════════════════════════════════════════════════════

/// `expect(field).to be_of_type("ID!")`
pub fn be_of_type<T: TypeLike + ?Sized>(expected: &T) -> TypeMatcher {
    type_matcher(expected)
}

/// Match an object type defining field `name`.
pub fn have_a_field(name: impl Into<String>) -> MemberMatcher {
    member_matcher(name, CollectionKind::Fields)
}

/// Alias for [`have_a_field`].
pub fn have_field(name: impl Into<String>) -> MemberMatcher {
    have_a_field(name)
}

/// Match an input object type defining input field `name`.
pub fn have_an_input_field(name: impl Into<String>) -> MemberMatcher {
    member_matcher(name, CollectionKind::InputFields)
}

/// Alias for [`have_an_input_field`].
pub fn have_input_field(name: impl Into<String>) -> MemberMatcher {
    have_an_input_field(name)
}

/// Match a mutation defining return field `name`.
pub fn have_a_return_field(name: impl Into<String>) -> MemberMatcher {
    member_matcher(name, CollectionKind::ReturnFields)
}

/// Alias for [`have_a_return_field`].
pub fn have_return_field(name: impl Into<String>) -> MemberMatcher {
    have_a_return_field(name)
}

/// Match a field accepting argument `name`.
pub fn accept_argument(name: impl Into<String>) -> MemberMatcher {
    argument_matcher(name)
}

/// Match a field accepting every `(name, type)` pair.
pub fn accept_arguments<I, N, T>(expected: I) -> ArgumentsMatcher
where
    I: IntoIterator<Item = (N, T)>,
    N: Into<String>,
    T: TypeLike,
{
    ArgumentsMatcher::new(expected)
}

/// Match an object implementing every interface in `names`.
pub fn implement<I>(names: I) -> RelationMatcher
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    relation_matcher(names)
}

/// Match an object implementing every interface in `interfaces`, by display name.
pub fn implement_interfaces(interfaces: &[&dyn Candidate]) -> RelationMatcher {
    RelationMatcher::of_interfaces(interfaces)
}

/// Match a result with at least one error.
pub fn return_graphql_error() -> ResultMatcher {
    result_error_matcher(None)
}

/// Match a result with an error whose message equals (or, for a
/// [`regex::Regex`], matches) `expected`.
pub fn return_graphql_error_with_message(expected: impl Into<ExpectedMessage>) -> ResultMatcher {
    result_error_matcher(Some(expected.into()))
}

/// Match a result with an error whose message matches the regex `pattern`.
///
/// # Errors
///
/// Returns [`MatchError::InvalidPattern`] if the regex does not compile.
pub fn return_graphql_error_matching(pattern: &str) -> Result<ResultMatcher, MatchError> {
    ResultMatcher::matching(pattern)
}
