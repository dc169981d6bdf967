//! Type class traits - the operation vocabulary shared by every container
//! family.
//!
//! The vocabulary is fixed and small:
//!
//! - [`Map`]: transform every element, preserving shape
//! - [`Fold`]: reduce to a summary value, left to right
//! - [`Count`]: number of elements held (family-only, no fallback)
//! - [`Flatten`]: remove one level of nesting (family-only, no fallback)
//! - [`Monad`]: wrap a value (`pure`) and sequence container-producing
//!   transformers (`bind`, defined once as map-then-flatten)
//!
//! A family joins the vocabulary by implementing these traits for its shape;
//! nothing in the existing families or in this module changes. Dispatch is
//! resolved statically from the concrete argument type, and an operation a
//! shape does not support is a translation failure at the call site.
//!
//! ## Foundation
//!
//! - [`Container`]: Generic-Associated-Type emulation of the family itself
//! - [`Identity`]: a bare value as a one-element context, the generic
//!   fallback for `Map` and `Fold` (and deliberately nothing more)
//!
//! ## Constant kernel
//!
//! - [`Constant`]: a type carrying a fixed value of a fixed type
//! - [`True`] / [`False`] / [`BoolConst`]: boolean constants
//! - [`Zero`] / [`One`] over any [`Numeric`] type, with the [`is_zero`]
//!   predicate
//! - [`Same`] / [`refl`]: type equality as a bound and as a value
//!
//! # Examples
//!
//! ```rust
//! use funkind::prelude::*;
//!
//! let total = list![1, 2, 3].fold(0, |acc, n| acc + n);
//! assert_eq!(total, 6);
//!
//! let shouted = Maybe::Just("fun").map(str::to_uppercase);
//! assert_eq!(shouted, Maybe::Just("FUN".to_string()));
//! ```

mod constant;
mod container;
mod flatten;
mod fold;
mod identity;
mod map;
mod monad;
mod refl;

pub use constant::{BoolConst, Constant, False, Numeric, One, True, Zero, is_zero};
pub use container::Container;
pub use flatten::Flatten;
pub use fold::{Count, Fold};
pub use identity::Identity;
pub use map::Map;
pub use monad::Monad;
pub use refl::{Same, refl};
