//! Container shape emulation through Generic Associated Types.
//!
//! This module provides the foundation for abstracting over container
//! families such as `List<_>` and `Maybe<_>`. Rust has no native
//! higher-kinded types, so the family itself cannot be named directly; the
//! [`Container`] trait uses a Generic Associated Type to recover the same
//! ability: given a container applied to one element type, name the same
//! container applied to another.
//!
//! Every operation trait in this crate ([`Map`](super::Map),
//! [`Fold`](super::Fold), [`Monad`](super::Monad)) builds on this trait.

/// A type belonging to some container family, applied to an element type.
///
/// `Container` emulates a higher-kinded type constraint: implementors expose
/// the element type they currently hold and a way to re-apply their family
/// to a different element type.
///
/// # Associated Types
///
/// - `Elem`: the element type this container is currently applied to.
/// - `Of<B>`: the same container family applied to `B`.
///
/// # Laws
///
/// For any `C: Container`:
///
/// 1. **Consistency**: `C::Of<C::Elem>` is the same type as `C`.
/// 2. **Stability**: `C::Of<B>` belongs to the same family as `C` for
///    every `B`; re-application never changes the family.
///
/// # Example
///
/// ```rust
/// use funkind::typeclass::Container;
/// use funkind::family::list::List;
///
/// fn rebuilds_in_family<C: Container<Elem = i32>>() {}
/// rebuilds_in_family::<List<i32>>();
/// ```
pub trait Container: Sized {
    /// The element type this container is applied to.
    type Elem;

    /// The same container family applied to a different element type `B`.
    ///
    /// The constraint `Container<Elem = B>` keeps the result usable as a
    /// container in its own right, so transformations can be chained.
    type Of<B>: Container<Elem = B>;
}

#[cfg(all(test, feature = "family"))]
mod tests {
    use super::*;
    use crate::family::list::List;
    use crate::family::maybe::Maybe;
    use crate::typeclass::Identity;

    fn assert_elem<C: Container<Elem = i32>>() {}

    #[test]
    fn list_exposes_its_element_type() {
        assert_elem::<List<i32>>();
    }

    #[test]
    fn maybe_exposes_its_element_type() {
        assert_elem::<Maybe<i32>>();
    }

    #[test]
    fn identity_exposes_its_element_type() {
        assert_elem::<Identity<i32>>();
    }

    #[test]
    fn reapplication_stays_in_the_family() {
        fn assert_is_list_of_string<C>()
        where
            List<i32>: Container<Of<String> = C>,
            C: Container<Elem = String>,
        {
        }
        assert_is_list_of_string::<List<String>>();
    }

    #[test]
    fn chained_reapplication() {
        type Step1 = <Maybe<i32> as Container>::Of<String>;
        type Step2 = <Step1 as Container>::Of<bool>;

        fn assert_is_maybe_bool<C: Container<Elem = bool>>() {}
        assert_is_maybe_bool::<Step2>();
    }
}
