//! Core algorithms for algobench.
//!
//! This crate provides the engines that the benchmark harness measures:
//!
//! - [`sort`] - Bubble sort and merge sort, each in an iterative and a
//!   recursive form
//! - [`search`] - Binary search, iterative and recursive
//!
//! Every engine is a pure function over a borrowed slice. Sort engines copy
//! their input before working on it, so the caller's data is never mutated.
//!
//! # Example
//!
//! ```
//! use algobench_core::search::binary_search_iterative;
//! use algobench_core::sort::{bubble_sort_recursive, merge_sort_iterative};
//!
//! let input = vec![5, 3, 1, 4, 2];
//! let sorted = merge_sort_iterative(&input);
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! assert_eq!(bubble_sort_recursive(&input), sorted);
//! assert_eq!(input, vec![5, 3, 1, 4, 2]);
//!
//! assert_eq!(binary_search_iterative(&sorted, &4), Some(3));
//! assert_eq!(binary_search_iterative(&sorted, &9), None);
//! ```

pub mod search;
pub mod sort;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use search::{binary_search_iterative, binary_search_recursive, SearchFn};
pub use sort::{
    bubble_sort_iterative, bubble_sort_recursive, merge, merge_sort_iterative,
    merge_sort_recursive, SortAlgorithm, SortFn,
};

/// An ordered collection of integers, the unit every engine operates on.
pub type Sequence = Vec<i64>;

/// Which form of an algorithm is being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Recursive,
    Iterative,
}

impl Variant {
    /// Both variants, in reporting order.
    pub const ALL: [Variant; 2] = [Variant::Recursive, Variant::Iterative];

    pub fn label(self) -> &'static str {
        match self {
            Variant::Recursive => "Recursive",
            Variant::Iterative => "Iterative",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
