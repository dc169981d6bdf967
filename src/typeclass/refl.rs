//! Type equality - the crate's sole equality mechanism for types.
//!
//! Two forms are provided:
//!
//! - [`Same`], a marker trait usable as a bound. It is implemented exactly
//!   reflexively, so requiring `A: Same<B>` for two distinct types fails
//!   during translation. The "false" case of the predicate surfaces as a
//!   rejected program, not a value.
//! - [`refl`], a value-level check over `'static` types, for places that
//!   want the answer as a `bool` (tests, mostly).

use std::any::TypeId;

/// Witness that two types are the same type.
///
/// Implemented only reflexively: `A: Same<B>` holds exactly when `A` and `B`
/// denote the identical type.
///
/// # Examples
///
/// ```rust
/// use funkind::typeclass::Same;
///
/// fn require_same<A: Same<B>, B>() {}
/// require_same::<i32, i32>();
/// // require_same::<i32, u32>(); // rejected: `i32: Same<u32>` is not satisfied
/// ```
pub trait Same<B> {}

impl<T> Same<T> for T {}

/// Returns whether `A` and `B` are the identical type.
///
/// # Examples
///
/// ```rust
/// use funkind::typeclass::refl;
///
/// assert!(refl::<i32, i32>());
/// assert!(!refl::<i32, i64>());
/// ```
#[must_use]
pub fn refl<A, B>() -> bool
where
    A: ?Sized + 'static,
    B: ?Sized + 'static,
{
    TypeId::of::<A>() == TypeId::of::<B>()
}
