//! Identity carrier - a bare value treated as a one-element context.
//!
//! [`Identity`] is the fallback that gives [`Map`](super::Map) and
//! [`Fold`](super::Fold) a meaning outside the container families: mapping
//! applies the transformer to the value directly, folding is a single
//! combining step.
//!
//! The fallback deliberately stops there. `Identity` implements neither
//! [`Count`](super::Count) nor [`Flatten`](super::Flatten) nor
//! [`Monad`](super::Monad): element counts and nesting removal are undefined
//! for a bare value, and the compiler rejects such calls.

use super::container::Container;
use super::fold::Fold;
use super::map::Map;

/// A single bare value, carried as the simplest possible context.
///
/// # Examples
///
/// ```rust
/// use funkind::typeclass::{Identity, Map};
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.map(|n| n + 1), Identity(43));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the carrier and returns the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A> Container for Identity<A> {
    type Elem = A;
    type Of<B> = Identity<B>;
}

impl<A> Map for Identity<A> {
    /// Applies the transformer to the value directly.
    #[inline]
    fn map<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<A> Fold for Identity<A> {
    /// One combining step: `function(init, value)`.
    #[inline]
    fn fold<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }
}

// Count and Flatten stay family-only; a bare value has neither an element
// count nor a nesting level to remove.
static_assertions::assert_not_impl_any!(Identity<i32>: super::Count, super::Flatten);
