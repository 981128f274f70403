//! Merge sort and its merge primitive.

/// Merges two sorted runs into one sorted vector.
///
/// When the heads of both runs compare equal, the element from `left` is
/// emitted first, which keeps the sort stable.
///
/// # Example
///
/// ```
/// use algobench_core::merge;
///
/// assert_eq!(merge(&[1, 4, 9], &[2, 4, 5]), vec![1, 2, 4, 4, 5, 9]);
/// assert_eq!(merge::<i64>(&[], &[]), Vec::<i64>::new());
/// ```
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    merge_into(left, right, &mut out);
    out
}

fn merge_into<T: Ord + Clone>(left: &[T], right: &[T], out: &mut Vec<T>) {
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}

/// Top-down merge sort.
///
/// Splits at `len / 2`, so the left half never holds more elements than the
/// right one. Recursion depth is logarithmic in the input length.
pub fn merge_sort_recursive<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let mid = input.len() / 2;
    let left = merge_sort_recursive(&input[..mid]);
    let right = merge_sort_recursive(&input[mid..]);
    merge(&left, &right)
}

/// Bottom-up merge sort.
///
/// Starts from runs of width 1 and merges adjacent pairs, doubling the width
/// each pass until a single run covers the input. The trailing run of a pass
/// may be shorter than the width.
pub fn merge_sort_iterative<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let n = input.len();
    let mut current = input.to_vec();
    if n <= 1 {
        return current;
    }

    let mut next = Vec::with_capacity(n);
    let mut width = 1;

    while width < n {
        next.clear();
        let mut start = 0;
        while start < n {
            let mid = start.saturating_add(width).min(n);
            let end = start.saturating_add(width.saturating_mul(2)).min(n);
            merge_into(&current[start..mid], &current[mid..end], &mut next);
            start = end;
        }
        std::mem::swap(&mut current, &mut next);
        width = width.saturating_mul(2);
    }

    current
}
