//! Seedable dataset and target generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use algobench_core::Sequence;

/// Largest value placed in a generated dataset. Values are uniform over
/// `0..=MAX_VALUE`.
pub const MAX_VALUE: i64 = 1_000_000;

/// Source of benchmark inputs.
///
/// Wraps an injected random generator, so a seeded generator makes every
/// dataset and target set of a session reproducible.
///
/// # Example
///
/// ```
/// use algobench_benchmark::DataSource;
///
/// let mut a = DataSource::seeded(7);
/// let mut b = DataSource::seeded(7);
/// assert_eq!(a.random_sequence(16), b.random_sequence(16));
/// ```
#[derive(Debug, Clone)]
pub struct DataSource<R> {
    rng: R,
    max_value: i64,
}

impl DataSource<ChaCha8Rng> {
    /// Creates a source backed by a ChaCha8 generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DataSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_value: MAX_VALUE,
        }
    }

    /// Sets the largest generated value (clamped to at least 0).
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value.max(0);
        self
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    /// Generates `len` uniformly distributed values, in generation order.
    pub fn random_sequence(&mut self, len: usize) -> Sequence {
        (0..len)
            .map(|_| self.rng.random_range(0..=self.max_value))
            .collect()
    }

    /// Generates `len` values and sorts them.
    pub fn sorted_sequence(&mut self, len: usize) -> Sequence {
        let mut items = self.random_sequence(len);
        items.sort_unstable();
        items
    }

    /// Draws `count` targets, with replacement, from `items`.
    ///
    /// Returns no targets if `items` is empty.
    pub fn sample_targets(&mut self, items: &[i64], count: usize) -> Vec<i64> {
        if items.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|_| items[self.rng.random_range(0..items.len())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobench_test::is_sorted;

    #[test]
    fn test_random_sequence_range() {
        let mut source = DataSource::seeded(1).with_max_value(10);
        let items = source.random_sequence(200);
        assert_eq!(items.len(), 200);
        assert!(items.iter().all(|v| (0..=10).contains(v)));
    }

    #[test]
    fn test_sorted_sequence() {
        let mut source = DataSource::seeded(2);
        let items = source.sorted_sequence(100);
        assert_eq!(items.len(), 100);
        assert!(is_sorted(&items));
    }

    #[test]
    fn test_targets_exist_in_items() {
        let mut source = DataSource::seeded(3);
        let items = source.sorted_sequence(50);
        let targets = source.sample_targets(&items, 8);
        assert_eq!(targets.len(), 8);
        assert!(targets.iter().all(|t| items.contains(t)));
    }

    #[test]
    fn test_no_targets_from_empty() {
        let mut source = DataSource::seeded(4);
        assert!(source.sample_targets(&[], 5).is_empty());
        assert!(source.random_sequence(0).is_empty());
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = DataSource::seeded(42);
        let mut b = DataSource::seeded(42);
        for len in [3, 10, 0, 7] {
            assert_eq!(a.random_sequence(len), b.random_sequence(len));
        }
        let items = a.sorted_sequence(20);
        assert_eq!(items, b.sorted_sequence(20));
        assert_eq!(a.sample_targets(&items, 5), b.sample_targets(&items, 5));
    }
}
