//! The maybe family: a container holding zero or one element.
//!
//! A [`Maybe`] is either [`Nothing`](Maybe::Nothing) or
//! [`Just`](Maybe::Just) holding exactly one value. Unlike
//! [`List`](crate::family::list::List), the shape is flat: nesting only
//! arises when the element type is itself a `Maybe`, and then
//! [`Flatten`](crate::typeclass::Flatten) collapses exactly that one level.
//!
//! The family mirrors the list's operation vocabulary without any traversal
//! machinery: every operation is a single exhaustive match on the two
//! shapes.
//!
//! # Examples
//!
//! ```rust
//! use funkind::prelude::*;
//!
//! let held: Maybe<i32> = Maybe::Just(5);
//! assert_eq!(held.map(|n| n + 1), Maybe::Just(6));
//! assert_eq!(held.count(), 1);
//!
//! let empty: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(empty.bind(|n| Maybe::Just(n + 1)), Maybe::Nothing);
//! ```

use crate::typeclass::{Container, Count, Flatten, Fold, Map, Monad};

/// A container holding zero or one element.
///
/// # Examples
///
/// ```rust
/// use funkind::family::maybe::Maybe;
///
/// let held = Maybe::Just(7);
/// assert!(held.is_just());
///
/// let empty: Maybe<i32> = Maybe::default();
/// assert!(empty.is_nothing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<A> {
    /// Holds nothing.
    Nothing,
    /// Holds exactly one value.
    Just(A),
}

impl<A> Default for Maybe<A> {
    /// The empty shape, for any element type.
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> Maybe<A> {
    /// Returns whether a value is held.
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns whether nothing is held.
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(value),
        }
    }

    /// Returns the held value, or `default` when nothing is held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkind::family::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(7).unwrap_or(0), 7);
    /// assert_eq!(Maybe::<i32>::Nothing.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Nothing => default,
            Self::Just(value) => value,
        }
    }

    /// Bridges into the standard library's optional type.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.into()
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        match value {
            None => Self::Nothing,
            Some(held) => Self::Just(held),
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        match value {
            Maybe::Nothing => None,
            Maybe::Just(held) => Some(held),
        }
    }
}

// =============================================================================
// Shape membership
// =============================================================================

mod sealed {
    pub trait Sealed {}

    impl<A> Sealed for super::Maybe<A> {}
}

/// Membership in the maybe family.
///
/// Implemented exactly for [`Maybe`], whichever of its two shapes a value
/// holds; the trait is sealed, so no foreign type can claim the shape.
///
/// # Examples
///
/// ```rust
/// use funkind::family::maybe::{Maybe, MaybeType};
///
/// fn requires_maybe<M: MaybeType>() {}
/// requires_maybe::<Maybe<i32>>();
/// // requires_maybe::<Option<i32>>(); // rejected: not a member of the family
/// ```
pub trait MaybeType: sealed::Sealed {}

impl<A> MaybeType for Maybe<A> {}

// =============================================================================
// Type class implementations
// =============================================================================

impl<A> Container for Maybe<A> {
    type Elem = A;
    type Of<B> = Maybe<B>;
}

impl<A> Map for Maybe<A> {
    /// Applies the transformer to the held value, if any; `Nothing` maps to
    /// `Nothing` without invoking the transformer.
    #[inline]
    fn map<B, F>(self, mut function: F) -> Maybe<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Self::Nothing => Maybe::Nothing,
            Self::Just(value) => Maybe::Just(function(value)),
        }
    }
}

impl<A> Fold for Maybe<A> {
    /// At most one combining step: `Nothing` reproduces the accumulator.
    #[inline]
    fn fold<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Nothing => init,
            Self::Just(value) => function(init, value),
        }
    }
}

impl<A> Count for Maybe<A> {
    /// Answers directly from the shape: 0 or 1.
    #[inline]
    fn count(&self) -> usize {
        match self {
            Self::Nothing => 0,
            Self::Just(_) => 1,
        }
    }
}

impl<A> Flatten for Maybe<Maybe<A>> {
    type Output = Maybe<A>;

    /// Collapses the one possible level of nesting; a value survives only
    /// when both levels hold one.
    #[inline]
    fn flatten(self) -> Maybe<A> {
        match self {
            Self::Nothing | Self::Just(Maybe::Nothing) => Maybe::Nothing,
            Self::Just(Maybe::Just(value)) => Maybe::Just(value),
        }
    }
}

impl<A> Monad for Maybe<A> {
    /// Wraps the value as a held one.
    #[inline]
    fn pure(value: A) -> Self {
        Self::Just(value)
    }
}

// Both shapes are members of the family; the standard optional is not.
static_assertions::assert_impl_all!(Maybe<u8>: MaybeType, Map, Fold, Count);
static_assertions::assert_impl_all!(Maybe<Maybe<u8>>: MaybeType, Flatten);
static_assertions::assert_not_impl_any!(Maybe<u8>: Flatten);
static_assertions::assert_not_impl_any!(Option<u8>: MaybeType);
static_assertions::assert_not_impl_any!(u8: MaybeType, Count);
