//! Predicates over sort and search outputs.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns true if `items` is in non-decreasing order.
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}

/// Returns true if `candidate` holds exactly the elements of `original`,
/// with multiplicity.
pub fn is_permutation_of<T: Eq + Hash>(candidate: &[T], original: &[T]) -> bool {
    if candidate.len() != original.len() {
        return false;
    }

    let mut counts: HashMap<&T, isize> = HashMap::new();
    for item in original {
        *counts.entry(item).or_default() += 1;
    }
    for item in candidate {
        *counts.entry(item).or_default() -= 1;
    }
    counts.values().all(|&c| c == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i64>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2, 3]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_is_permutation_of() {
        assert!(is_permutation_of(&[3, 1, 2], &[1, 2, 3]));
        assert!(is_permutation_of(&[2, 2, 1], &[2, 1, 2]));
        assert!(!is_permutation_of(&[1, 1, 2], &[1, 2, 2]));
        assert!(!is_permutation_of(&[1, 2], &[1, 2, 3]));
    }
}
