//! Sort engines.
//!
//! Each engine takes a borrowed slice and returns a new, fully sorted
//! (non-decreasing) vector holding the same elements. Empty and single
//! element inputs are valid and come back as copies.

mod bubble;
mod merge;


pub use bubble::{bubble_sort_iterative, bubble_sort_recursive, DEEP_RECURSION_LEN};
pub use merge::{merge, merge_sort_iterative, merge_sort_recursive};

use serde::{Deserialize, Serialize};

use crate::Variant;

/// Function pointer shape shared by every sort engine.
pub type SortFn<T> = fn(&[T]) -> Vec<T>;

/// The sorting algorithms available to the benchmark driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    Bubble,
    Merge,
}

impl SortAlgorithm {
    /// Returns the engine implementing `variant` of this algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use algobench_core::{SortAlgorithm, Variant};
    ///
    /// let sort = SortAlgorithm::Merge.engine::<i64>(Variant::Recursive);
    /// assert_eq!(sort(&[3, 1, 2]), vec![1, 2, 3]);
    /// ```
    pub fn engine<T: Ord + Clone>(self, variant: Variant) -> SortFn<T> {
        match (self, variant) {
            (SortAlgorithm::Bubble, Variant::Iterative) => bubble_sort_iterative,
            (SortAlgorithm::Bubble, Variant::Recursive) => bubble_sort_recursive,
            (SortAlgorithm::Merge, Variant::Iterative) => merge_sort_iterative,
            (SortAlgorithm::Merge, Variant::Recursive) => merge_sort_recursive,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Merge => "Merge Sort",
        }
    }
}
