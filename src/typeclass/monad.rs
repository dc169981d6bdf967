//! Monad operations - wrapping values and sequencing container-producing
//! transformers.
//!
//! This module provides the [`Monad`] trait: `pure` wraps a single value as
//! a minimal one-element container, and `bind` applies a container-producing
//! transformer to every element and collapses the nesting by one level.
//!
//! `bind` is defined once for the whole vocabulary as map-then-flatten; both
//! families use that single body, so the sequencing behavior cannot drift
//! between them.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Wrapping a value and binding a transformer equals applying the
//! transformer:
//!
//! ```text
//! pure(a).bind(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` returns the original container:
//!
//! ```text
//! m.bind(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkind::prelude::*;
//!
//! // The list monad: bind is "map then concatenate".
//! let pairs = list![1, 2, 3].bind(|n| list![n, n * 10]);
//! assert_eq!(pairs, list![1, 10, 2, 20, 3, 30]);
//!
//! // The maybe monad: Nothing short-circuits.
//! let missing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(missing.bind(|n| Maybe::Just(n + 1)), Maybe::Nothing);
//! ```

use super::container::Container;
use super::flatten::Flatten;
use super::map::Map;

/// Wraps single values into a container family and sequences
/// container-producing transformers over it.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// pure(a).bind(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.bind(pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use funkind::prelude::*;
///
/// let wrapped: Maybe<i32> = Maybe::pure(42);
/// assert_eq!(wrapped, Maybe::Just(42));
/// ```
pub trait Monad: Map {
    /// Wraps a single value as a minimal one-element container of this
    /// family.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkind::prelude::*;
    ///
    /// let singleton: List<i32> = List::pure(1);
    /// assert_eq!(singleton, list![1]);
    /// ```
    fn pure(value: Self::Elem) -> Self;

    /// Applies a container-producing transformer to every element, then
    /// flattens the nested result by one level.
    ///
    /// This single body serves every family: `map` builds the nested
    /// container and [`Flatten`] collapses it, so the bound on `Of<Of<B>>`
    /// is exactly "the nested shape can be flattened back into the family".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkind::prelude::*;
    ///
    /// let halves = list![2, 5, 8].bind(|n| {
    ///     if n % 2 == 0 { list![n / 2] } else { list![] }
    /// });
    /// assert_eq!(halves, list![1, 4]);
    /// ```
    #[inline]
    fn bind<B, F>(self, function: F) -> Self::Of<B>
    where
        F: FnMut(Self::Elem) -> Self::Of<B>,
        Self::Of<Self::Of<B>>: Flatten<Output = Self::Of<B>>,
    {
        self.map(function).flatten()
    }
}

#[cfg(all(test, feature = "family"))]
mod tests {
    use crate::family::list::List;
    use crate::family::maybe::Maybe;
    use crate::list;
    use crate::typeclass::Monad;
    use rstest::rstest;

    #[rstest]
    fn list_pure_is_a_singleton() {
        assert_eq!(List::pure('x'), list!['x']);
    }

    #[rstest]
    fn maybe_pure_holds_the_value() {
        assert_eq!(Maybe::pure('x'), Maybe::Just('x'));
    }

    #[rstest]
    fn list_bind_maps_then_concatenates() {
        let result = list![1, 2].bind(|n| list![n, -n]);
        assert_eq!(result, list![1, -1, 2, -2]);
    }

    #[rstest]
    fn list_bind_with_empty_results_drops_elements() {
        let result = list![1, 2, 3].bind(|_| List::<i32>::Nil);
        assert_eq!(result, List::Nil);
    }

    #[rstest]
    fn maybe_bind_sequences_presence() {
        assert_eq!(Maybe::Just(3).bind(|n| Maybe::Just(n * 2)), Maybe::Just(6));
        assert_eq!(Maybe::Just(3).bind(|_| Maybe::<i32>::Nothing), Maybe::Nothing);
        assert_eq!(
            Maybe::<i32>::Nothing.bind(|n| Maybe::Just(n * 2)),
            Maybe::Nothing
        );
    }

    /// Law spot checks; the property suites live in tests/.
    #[rstest]
    fn left_identity_law() {
        let transformer = |n: i32| list![n, n + 1];
        assert_eq!(List::pure(5).bind(transformer), transformer(5));
    }

    #[rstest]
    fn right_identity_law() {
        let events = list![1, 2, 3];
        assert_eq!(events.clone().bind(List::pure), events);

        let held = Maybe::Just(9);
        assert_eq!(held.bind(Maybe::pure), held);
    }
}
