//! Binary search.
//!
//! Bounds are kept half-open (`left..right`) so they never underflow, but
//! the midpoint is the floor of the inclusive bounds, `(left + right - 1) / 2`.
//! Both variants therefore probe the same positions and agree on which
//! duplicate they return.

use std::cmp::Ordering;

/// Loops, narrowing the bounds, until the target is found or they cross.
pub fn binary_search_iterative<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut left = 0;
    let mut right = items.len();

    while left < right {
        let mid = midpoint(left, right);
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }

    None
}

/// Recurses on the half that may still hold the target.
pub fn binary_search_recursive<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    search_range(items, target, 0, items.len())
}

fn search_range<T: Ord>(items: &[T], target: &T, left: usize, right: usize) -> Option<usize> {
    if left >= right {
        return None;
    }

    let mid = midpoint(left, right);
    match items[mid].cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_range(items, target, mid + 1, right),
        Ordering::Greater => search_range(items, target, left, mid),
    }
}

#[inline]
fn midpoint(left: usize, right: usize) -> usize {
    left + (right - 1 - left) / 2
}
