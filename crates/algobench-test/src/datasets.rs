//! Deterministic datasets.

use proptest::collection::vec;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The worked example used across the engine tests.
pub const SCENARIO_INPUT: [i64; 5] = [5, 3, 1, 4, 2];

/// Generates `len` values in `0..=max_value` from a fixed seed.
pub fn seeded_dataset(seed: u64, len: usize, max_value: i64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(0..=max_value)).collect()
}

/// Strategy for arbitrary sequences, duplicates and negatives included.
pub fn unsorted_sequence(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    vec(-50i64..50, 0..=max_len)
}

/// Strategy for sequences already in non-decreasing order.
pub fn sorted_sequence(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    unsorted_sequence(max_len).prop_map(|mut items| {
        items.sort();
        items
    })
}
