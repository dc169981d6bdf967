//! Fold and Count operations - reducing a container to a summary value.
//!
//! [`Fold`] threads an accumulator through a container's elements from left
//! to right. [`Count`] reports how many elements a container holds.
//!
//! The two operations have different fallback policies, mirrored from the
//! design of the vocabulary:
//!
//! - `Fold` has a sensible meaning for a bare value ("one combining step"),
//!   carried by the [`Identity`](super::Identity) implementation.
//! - `Count` has **no** generic meaning: "how many elements" is undefined
//!   without knowing the container's shape, so the trait has no default
//!   body and no blanket implementation. Invoking `count` on anything other
//!   than a recognized family is a compile error at the call site.
//!
//! # Examples
//!
//! ```rust
//! use funkind::prelude::*;
//!
//! let sum = list![1, 2, 3, 4].fold(0, |acc, n| acc + n);
//! assert_eq!(sum, 10);
//!
//! assert_eq!(list!['a', 'b'].count(), 2);
//! assert_eq!(Maybe::<char>::Nothing.count(), 0);
//! ```

use super::container::Container;

/// Reduces a container to a single value with a strict left fold.
///
/// Elements are combined head-to-tail; no associativity or commutativity of
/// the combining function is assumed or required.
///
/// # Laws
///
/// ## Identity case
///
/// Folding an empty shape reproduces the initial accumulator:
///
/// ```text
/// empty.fold(init, f) == init
/// ```
///
/// # Examples
///
/// ```rust
/// use funkind::prelude::*;
///
/// // Left fold: ((0 - 1) - 2) - 3 = -6, not 0 - (1 - (2 - 3)).
/// let result = list![1, 2, 3].fold(0, |acc, n| acc - n);
/// assert_eq!(result, -6);
/// ```
pub trait Fold: Container {
    /// Folds the elements from left to right, threading the accumulator.
    ///
    /// # Arguments
    ///
    /// * `init` - the initial accumulator value
    /// * `function` - combines the accumulator with one element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkind::typeclass::Fold;
    /// use funkind::family::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Just(10).fold(5, |acc, n| acc + n), 15);
    /// assert_eq!(Maybe::<i32>::Nothing.fold(5, |acc, n| acc + n), 5);
    /// ```
    fn fold<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Elem) -> B;
}

/// Reports the number of elements held by a container value.
///
/// `Count` is deliberately not derivable from [`Fold`]: there is no default
/// body, and only the container families implement it. Each family chooses
/// its own route: [`List`](crate::family::list::List) counts through its
/// fold with an add-one step from zero, while
/// [`Maybe`](crate::family::maybe::Maybe) answers directly from its shape.
///
/// # Examples
///
/// ```rust
/// use funkind::prelude::*;
///
/// assert_eq!(list![9, 9, 9].count(), 3);
/// assert_eq!(Maybe::Just(9).count(), 1);
/// ```
pub trait Count {
    /// The number of elements held, always ≥ 0.
    fn count(&self) -> usize;
}
