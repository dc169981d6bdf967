//! Flatten operation - removing one level of container nesting.
//!
//! [`Flatten`] collapses a container-of-containers into a single container:
//! a `List<List<A>>` becomes the concatenation of its inner lists, a
//! `Maybe<Maybe<A>>` becomes the inner value if both levels hold one.
//!
//! Like [`Count`](super::Count), flattening has no generic meaning: it only
//! exists for one-level-nested shapes of a recognized family. There is no
//! implementation for `List<A>` with a non-list element, so
//! `list![1, 2].flatten()` is rejected during translation.

/// Removes exactly one level of nesting from a nested container.
///
/// Implemented only where nesting is structurally present:
/// `List<List<A>>` and `Maybe<Maybe<A>>`.
///
/// # Examples
///
/// ```rust
/// use funkind::prelude::*;
///
/// let nested = list![list![1, 2], list![3], list![]];
/// assert_eq!(nested.flatten(), list![1, 2, 3]);
///
/// let held: Maybe<Maybe<i32>> = Maybe::Just(Maybe::Just(7));
/// assert_eq!(held.flatten(), Maybe::Just(7));
/// ```
pub trait Flatten {
    /// The container with one level of nesting removed.
    type Output;

    /// Collapses the outer level, preserving the relative order of all
    /// elements across the inner containers.
    fn flatten(self) -> Self::Output;
}
