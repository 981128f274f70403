//! Benchmark configuration.

use crate::random::MAX_VALUE;

/// Configuration for a benchmark run.
///
/// Controls the repeat count, the random seed and the value range of the
/// generated datasets.
///
/// # Example
///
/// ```
/// use algobench_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("My Benchmark")
///     .with_repeats(10)
///     .with_seed(7);
///
/// assert_eq!(config.name(), "My Benchmark");
/// assert_eq!(config.repeats(), 10);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    repeats: usize,
    seed: u64,
    max_value: i64,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - repeats: 5
    /// - seed: 42
    /// - max_value: [`MAX_VALUE`]
    ///
    /// # Example
    ///
    /// ```
    /// use algobench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.repeats(), 5);
    /// assert_eq!(config.seed(), 42);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repeats: 5,
            seed: 42,
            max_value: MAX_VALUE,
        }
    }

    /// Sets the number of timed repetitions per size.
    ///
    /// Zero is allowed and yields `0.0` means.
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Sets the seed for dataset generation and target sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the largest generated value.
    ///
    /// # Example
    ///
    /// ```
    /// use algobench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test").with_max_value(100);
    /// assert_eq!(config.max_value(), 100);
    /// ```
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repeats(&self) -> usize {
        self.repeats
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
