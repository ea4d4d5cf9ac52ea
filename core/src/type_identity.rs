//! Type identity — canonical type signatures
//!
//! Types are compared only through their textual signature, with wrappers
//! serialized in the order they were applied: `[ID!]` (list of non-null) and
//! `[ID]!` (non-null list) stay distinct.

use crate::MatchError;
use std::fmt;
use std::str::FromStr;

/// A type reference that can be reduced to a canonical signature.
///
/// Objects that know their signature override [`to_type_signature`](Self::to_type_signature);
/// everything else falls back to its `Display` output. Plain strings are
/// taken to already be in signature form.
///
/// # Example
///
/// ```
/// use gqlmatch::{signature, TypeRef};
///
/// assert_eq!(signature("ID!"), "ID!");
/// assert_eq!(signature(&TypeRef::named("Int").non_null().list()), "[Int!]");
/// ```
pub trait TypeLike: fmt::Display {
    /// The canonical signature, when this object exposes one.
    fn to_type_signature(&self) -> Option<String> {
        None
    }
}

impl TypeLike for str {}

impl TypeLike for String {}

impl TypeLike for TypeRef {
    fn to_type_signature(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: TypeLike + ?Sized> TypeLike for &T {
    fn to_type_signature(&self) -> Option<String> {
        (**self).to_type_signature()
    }
}

/// Reduce a type reference to its canonical signature.
///
/// Idempotent: the signature of a signature string is itself.
pub fn signature<T: TypeLike + ?Sized>(type_ref: &T) -> String {
    type_ref
        .to_type_signature()
        .unwrap_or_else(|| type_ref.to_string())
}

/// Compare two type references after normalizing each independently.
pub fn signatures_equal<A, B>(a: &A, b: &B) -> bool
where
    A: TypeLike + ?Sized,
    B: TypeLike + ?Sized,
{
    signature(a) == signature(b)
}

/// A structured GraphQL type reference.
///
/// # Example
///
/// ```
/// use gqlmatch::TypeRef;
///
/// let ids: TypeRef = "[ID!]!".parse().unwrap();
/// assert_eq!(ids, TypeRef::named("ID").non_null().list().non_null());
/// assert_eq!(ids.to_string(), "[ID!]!");
/// assert_eq!(ids.named_type(), "ID");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A named type (`ID`, `String`, `User`).
    Named(String),
    /// A non-null wrapper (`T!`).
    NonNull(Box<TypeRef>),
    /// A list wrapper (`[T]`).
    List(Box<TypeRef>),
}

impl TypeRef {
    /// A named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wrap in non-null. Already non-null references are returned unchanged.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Wrap in a list.
    #[must_use]
    pub fn list(self) -> Self {
        Self::List(Box::new(self))
    }

    /// Whether the outermost wrapper is non-null.
    #[must_use]
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// The innermost named type.
    #[must_use]
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::NonNull(inner) | Self::List(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s.trim()).ok_or_else(|| MatchError::InvalidConfig {
            reason: format!("invalid type signature \"{s}\""),
        })
    }
}

fn parse(s: &str) -> Option<TypeRef> {
    if let Some(inner) = s.strip_suffix('!') {
        if inner.ends_with('!') {
            return None;
        }
        return parse(inner).map(|t| TypeRef::NonNull(Box::new(t)));
    }
    if let Some(inner) = s.strip_prefix('[') {
        let inner = inner.strip_suffix(']')?;
        return parse(inner).map(|t| TypeRef::List(Box::new(t)));
    }
    is_name(s).then(|| TypeRef::Named(s.to_string()))
}

fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
