//! Shared test fixtures for algobench crates.
//!
//! - [`checks`] - Sortedness and permutation predicates
//! - [`datasets`] - Deterministic datasets and proptest strategies
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! algobench-test = { workspace = true }
//! ```

pub mod checks;
pub mod datasets;

pub use checks::{is_permutation_of, is_sorted};
pub use datasets::{seeded_dataset, sorted_sequence, unsorted_sequence, SCENARIO_INPUT};
