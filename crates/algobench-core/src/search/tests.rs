//! Tests for binary search.

use algobench_test::sorted_sequence;
use proptest::prelude::*;

use super::*;
use crate::Variant;

const SORTED: [i64; 5] = [1, 3, 5, 7, 9];

#[test]
fn test_finds_present_target() {
    assert_eq!(binary_search_iterative(&SORTED, &7), Some(3));
    assert_eq!(binary_search_recursive(&SORTED, &7), Some(3));
    assert_eq!(binary_search_iterative(&SORTED, &1), Some(0));
    assert_eq!(binary_search_recursive(&SORTED, &9), Some(4));
}

#[test]
fn test_missing_target() {
    for search in [engine::<i64>(Variant::Iterative), engine(Variant::Recursive)] {
        assert_eq!(search(&SORTED, &4), None);
        assert_eq!(search(&SORTED, &0), None);
        assert_eq!(search(&SORTED, &10), None);
    }
}

#[test]
fn test_empty_and_single() {
    assert_eq!(binary_search_iterative::<i64>(&[], &1), None);
    assert_eq!(binary_search_recursive::<i64>(&[], &1), None);
    assert_eq!(binary_search_iterative(&[4], &4), Some(0));
    assert_eq!(binary_search_recursive(&[4], &5), None);
}

#[test]
fn test_duplicates_return_a_matching_index() {
    let items = [2, 2, 2, 2, 3];
    let i = binary_search_iterative(&items, &2).unwrap();
    let r = binary_search_recursive(&items, &2).unwrap();
    assert_eq!(items[i], 2);
    assert_eq!(items[r], 2);
    // Same probe sequence, so the variants land on the same duplicate.
    assert_eq!(i, r);
}

proptest! {
    #[test]
    fn prop_every_element_is_found(items in sorted_sequence(64)) {
        for x in &items {
            for variant in Variant::ALL {
                let found = engine(variant)(&items, x);
                prop_assert!(found.is_some());
                prop_assert_eq!(items[found.unwrap()], *x);
            }
        }
    }

    #[test]
    fn prop_absent_is_none(items in sorted_sequence(64), x in -200i64..200) {
        prop_assume!(!items.contains(&x));
        prop_assert_eq!(binary_search_iterative(&items, &x), None);
        prop_assert_eq!(binary_search_recursive(&items, &x), None);
    }

    #[test]
    fn prop_variants_agree(items in sorted_sequence(64), x in -60i64..60) {
        prop_assert_eq!(
            binary_search_iterative(&items, &x),
            binary_search_recursive(&items, &x)
        );
    }
}
