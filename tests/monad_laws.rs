//! Property-based tests for the Monad laws.
//!
//! Verifies, for both container families:
//!
//! - **Left Identity**: `pure(a).bind(f) == f(a)`
//! - **Right Identity**: `m.bind(pure) == m`
//! - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`

use funkind::family::list::List;
use funkind::family::maybe::Maybe;
use funkind::list;
use funkind::typeclass::Monad;
use proptest::prelude::*;

fn list_of_i32() -> impl Strategy<Value = List<i32>> {
    prop::collection::vec(any::<i32>(), 0..16).prop_map(|elements| elements.into_iter().collect())
}

fn maybe_of_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

// =============================================================================
// List monad laws
// =============================================================================

fn duplicate(n: i32) -> List<i32> {
    list![n, n]
}

fn halve_evens(n: i32) -> List<i32> {
    if n % 2 == 0 { list![n / 2] } else { list![] }
}

proptest! {
    /// Left identity for the list monad.
    #[test]
    fn prop_list_left_identity(value in any::<i32>()) {
        prop_assert_eq!(List::pure(value).bind(duplicate), duplicate(value));
        prop_assert_eq!(List::pure(value).bind(halve_evens), halve_evens(value));
    }

    /// Right identity for the list monad.
    #[test]
    fn prop_list_right_identity(value in list_of_i32()) {
        prop_assert_eq!(value.clone().bind(List::pure), value);
    }

    /// Associativity for the list monad.
    #[test]
    fn prop_list_associativity(value in list_of_i32()) {
        let left = value.clone().bind(duplicate).bind(halve_evens);
        let right = value.bind(|x| duplicate(x).bind(halve_evens));
        prop_assert_eq!(left, right);
    }

    /// Bind with an always-empty transformer empties the list.
    #[test]
    fn prop_list_bind_to_empty(value in list_of_i32()) {
        prop_assert_eq!(value.bind(|_| List::<i32>::Nil), List::Nil);
    }
}

// =============================================================================
// Maybe monad laws
// =============================================================================

fn successor(n: i32) -> Maybe<i32> {
    Maybe::Just(n.wrapping_add(1))
}

fn keep_positive(n: i32) -> Maybe<i32> {
    if n > 0 { Maybe::Just(n) } else { Maybe::Nothing }
}

proptest! {
    /// Left identity for the maybe monad.
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::pure(value).bind(successor), successor(value));
        prop_assert_eq!(Maybe::pure(value).bind(keep_positive), keep_positive(value));
    }

    /// Right identity for the maybe monad.
    #[test]
    fn prop_maybe_right_identity(value in maybe_of_i32()) {
        prop_assert_eq!(value.bind(Maybe::pure), value);
    }

    /// Associativity for the maybe monad.
    #[test]
    fn prop_maybe_associativity(value in maybe_of_i32()) {
        let left = value.bind(successor).bind(keep_positive);
        let right = value.bind(|x| successor(x).bind(keep_positive));
        prop_assert_eq!(left, right);
    }
}

/// Nothing absorbs every transformer.
#[test]
fn maybe_nothing_absorbs() {
    assert_eq!(Maybe::<i32>::Nothing.bind(successor), Maybe::Nothing);
    assert_eq!(Maybe::<i32>::Nothing.bind(keep_positive), Maybe::Nothing);
}
