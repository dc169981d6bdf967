//! The container families.
//!
//! Two inductively defined families share the crate's operation vocabulary:
//!
//! - [`List`]: an unbounded sequence, either empty or a head element bound to a
//!   tail that is itself a list, with structural sharing between versions.
//! - [`Maybe`]: zero or one element, either empty or holding exactly one value.
//!
//! The families are structurally unrelated; what they share is the
//! vocabulary of [`Map`](crate::typeclass::Map),
//! [`Fold`](crate::typeclass::Fold), [`Count`](crate::typeclass::Count),
//! [`Flatten`](crate::typeclass::Flatten) and
//! [`Monad`](crate::typeclass::Monad), each implemented once per family.
//! Membership is decidable through the sealed marker traits [`ListType`]
//! and [`MaybeType`].
//!
//! # Examples
//!
//! ```rust
//! use funkind::prelude::*;
//!
//! // One vocabulary, two shapes.
//! assert_eq!(list![1, 2, 3].count(), 3);
//! assert_eq!(Maybe::Just('x').count(), 1);
//! ```

pub mod list;
pub mod maybe;

pub use list::{IntoIter, Iter, List, ListType};
pub use maybe::{Maybe, MaybeType};
