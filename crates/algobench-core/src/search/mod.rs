//! Search engines.
//!
//! Binary search over a slice sorted in non-decreasing order. Both variants
//! return `Some(index)` of an occurrence of the target, or `None` when the
//! target is absent. With duplicate targets any matching index may be
//! returned; callers must not rely on getting the first or last one.
//!
//! An unsorted slice is a contract violation. It is not detected, and the
//! result is then meaningless.

mod binary;

#[cfg(test)]
mod tests;

pub use binary::{binary_search_iterative, binary_search_recursive};

/// Function pointer shape shared by both search engines.
pub type SearchFn<T> = fn(&[T], &T) -> Option<usize>;

/// Returns the engine implementing `variant` of binary search.
///
/// # Example
///
/// ```
/// use algobench_core::search::engine;
/// use algobench_core::Variant;
///
/// let search = engine::<i64>(Variant::Recursive);
/// assert_eq!(search(&[1, 3, 5, 7, 9], &7), Some(3));
/// ```
pub fn engine<T: Ord>(variant: crate::Variant) -> SearchFn<T> {
    match variant {
        crate::Variant::Iterative => binary_search_iterative,
        crate::Variant::Recursive => binary_search_recursive,
    }
}
