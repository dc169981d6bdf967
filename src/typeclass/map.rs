//! Map operation - transforming every element of a container.
//!
//! This module provides the [`Map`] trait: apply a transformer to each
//! element of a container while preserving the container's shape. Mapping a
//! list never changes its length; mapping a `Maybe` never changes whether a
//! value is held.
//!
//! A bare value can always be treated as a one-element context, so the
//! vocabulary also covers values outside any family through the
//! [`Identity`](super::Identity) carrier, whose `map` applies the
//! transformer directly.
//!
//! # Laws
//!
//! All `Map` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function returns an equivalent container:
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence equals mapping their composition:
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkind::typeclass::Map;
//! use funkind::family::maybe::Maybe;
//!
//! let held: Maybe<i32> = Maybe::Just(5);
//! assert_eq!(held.map(|n| n.to_string()), Maybe::Just("5".to_string()));
//!
//! let empty: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(empty.map(|n| n.to_string()), Maybe::Nothing);
//! ```

use super::container::Container;

/// Applies a transformer to every element of a container, preserving shape.
///
/// The transformer is `FnMut` because a container may hold any number of
/// elements; it is applied once per element, in order.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.map(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.map(f).map(g) == fa.map(|x| g(f(x)))
/// ```
///
/// # Examples
///
/// ```rust
/// use funkind::prelude::*;
///
/// let doubled = list![1, 2, 3].map(|n| n * 2);
/// assert_eq!(doubled, list![2, 4, 6]);
/// ```
pub trait Map: Container {
    /// Applies `function` to every element, producing a container of the
    /// same family and shape over the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkind::typeclass::Map;
    /// use funkind::family::maybe::Maybe;
    ///
    /// let held: Maybe<i32> = Maybe::Just(5);
    /// assert_eq!(held.map(|n| n * 2), Maybe::Just(10));
    /// ```
    fn map<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnMut(Self::Elem) -> B;

    /// Replaces every element with a clone of `value`, keeping the shape.
    ///
    /// Equivalent to `map(|_| value.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkind::prelude::*;
    ///
    /// assert_eq!(list![1, 2, 3].replace("x"), list!["x", "x", "x"]);
    /// assert_eq!(Maybe::<i32>::Nothing.replace("x"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::Of<B>
    where
        B: Clone,
    {
        self.map(|_| value.clone())
    }
}

#[cfg(all(test, feature = "family"))]
mod tests {
    use crate::family::list::List;
    use crate::family::maybe::Maybe;
    use crate::list;
    use crate::typeclass::{Identity, Map};
    use rstest::rstest;

    #[rstest]
    fn list_map_transforms_every_element() {
        let lengths = list!["a", "bb", "ccc"].map(str::len);
        assert_eq!(lengths, list![1, 2, 3]);
    }

    #[rstest]
    fn list_map_on_empty_is_empty() {
        let empty: List<i32> = List::Nil;
        assert_eq!(empty.map(|n| n + 1), List::Nil);
    }

    #[rstest]
    fn maybe_map_applies_when_held() {
        assert_eq!(Maybe::Just(5).map(|n| n + 1), Maybe::Just(6));
    }

    #[rstest]
    fn maybe_map_skips_when_empty() {
        let empty: Maybe<i32> = Maybe::Nothing;
        assert_eq!(empty.map(|n| n + 1), Maybe::Nothing);
    }

    #[rstest]
    fn identity_map_applies_directly() {
        assert_eq!(Identity(5).map(|n| n * 3), Identity(15));
    }

    #[rstest]
    fn replace_preserves_shape() {
        assert_eq!(list![1, 2].replace(()), list![(), ()]);
        assert_eq!(Maybe::Just(1).replace("held"), Maybe::Just("held"));
    }

    /// Identity law spot checks; the property suites live in tests/.
    #[rstest]
    fn map_identity_law() {
        let events = list![1, 2, 3];
        assert_eq!(events.clone().map(|x| x), events);

        let held = Maybe::Just(4);
        assert_eq!(held.map(|x| x), held);
    }

    #[rstest]
    fn map_composition_law() {
        let add_one = |n: i32| n + 1;
        let double = |n: i32| n * 2;

        let left = list![1, 2, 3].map(add_one).map(double);
        let right = list![1, 2, 3].map(|n| double(add_one(n)));
        assert_eq!(left, right);
    }
}
