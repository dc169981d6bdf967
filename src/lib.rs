//! # funkind
//!
//! A minimal functional-programming core for Rust: two container families
//! ([`List`](family::list::List) and [`Maybe`](family::maybe::Maybe)) sharing
//! one operation vocabulary, dispatched statically per family.
//!
//! ## Overview
//!
//! The crate is built from two layers:
//!
//! - **Type Classes**: the operation vocabulary ([`Map`](typeclass::Map),
//!   [`Fold`](typeclass::Fold), [`Count`](typeclass::Count),
//!   [`Flatten`](typeclass::Flatten), [`Monad`](typeclass::Monad)) plus the
//!   constant kernel ([`Constant`](typeclass::Constant),
//!   [`Zero`](typeclass::Zero), [`One`](typeclass::One)) and type equality
//!   ([`Same`](typeclass::Same), [`refl`](typeclass::refl)).
//! - **Container Families**: the inductively shaped [`List`](family::list::List)
//!   (empty or head-plus-tail, with structural sharing) and the flat
//!   [`Maybe`](family::maybe::Maybe) (empty or holds-one).
//!
//! Each operation is a capability trait implemented once per family; a new
//! family plugs into the vocabulary without touching existing code. There is
//! no runtime dispatch: the concrete shape of the argument selects the
//! implementation during translation, and using an operation on a shape that
//! does not support it (for example counting a bare value) is rejected by the
//! compiler, never at run time.
//!
//! ## Feature Flags
//!
//! - `typeclass`: the operation vocabulary and the constant kernel
//! - `family`: the `List` and `Maybe` container families
//!
//! Both are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use funkind::prelude::*;
//!
//! let lengths = list!["fun", "kind"].map(|word| word.len());
//! assert_eq!(lengths, list![3, 4]);
//!
//! let nested = list![list![1, 2], list![], list![3]];
//! assert_eq!(nested.flatten(), list![1, 2, 3]);
//!
//! let held: Maybe<i32> = Maybe::Just(7);
//! assert_eq!(held.bind(|n| Maybe::Just(n + 1)), Maybe::Just(8));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the operation vocabulary, the constant kernel, and both
/// container families.
///
/// # Usage
///
/// ```rust
/// use funkind::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "family")]
    pub use crate::family::*;

    #[cfg(feature = "family")]
    pub use crate::list;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "family")]
pub mod family;
