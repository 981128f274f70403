//! Bubble sort.

/// Input length above which [`bubble_sort_recursive`] nests deeply enough to
/// be worth a diagnostic. One stack frame is used per element.
pub const DEEP_RECURSION_LEN: usize = 5_000;

/// Sorts a copy of `input` with repeated adjacent-swap passes.
///
/// Each pass stops one element earlier than the previous one, since the
/// largest remaining element has already bubbled to the end. A pass with no
/// swaps ends the sort early, so already sorted input costs a single pass.
pub fn bubble_sort_iterative<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut items = input.to_vec();
    let n = items.len();

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    items
}

/// Sorts a copy of `input` with one bubble pass per recursion level.
///
/// A pass over the first `n` elements fixes the element at `n - 1`; the
/// remaining prefix is then sorted recursively. There is no early exit.
///
/// Recursion depth equals `input.len()`, so very long inputs can exhaust the
/// thread's stack. See [`DEEP_RECURSION_LEN`].
pub fn bubble_sort_recursive<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut items = input.to_vec();
    bubble_prefix(&mut items);
    items
}

fn bubble_prefix<T: Ord>(prefix: &mut [T]) {
    let n = prefix.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        if prefix[i] > prefix[i + 1] {
            prefix.swap(i, i + 1);
        }
    }

    bubble_prefix(&mut prefix[..n - 1]);
}
