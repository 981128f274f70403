//! Benchmark driver.
//!
//! For every requested size one dataset is generated outside the timed
//! region, then each variant is timed against it. Results come back in the
//! order the sizes were given.

use std::hint::black_box;
use std::time::Instant;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use algobench_core::sort::DEEP_RECURSION_LEN;
use algobench_core::{search, SortAlgorithm, Variant};

use crate::config::BenchmarkConfig;
use crate::random::DataSource;
use crate::result::{BenchmarkResult, BenchmarkSeries, Family};
use crate::timing::{time_each_ms, time_ms};

fn sort_results<R: Rng>(
    algorithm: SortAlgorithm,
    sizes: &[usize],
    repeats: usize,
    source: &mut DataSource<R>,
) -> Vec<BenchmarkResult> {
    let iterative = algorithm.engine::<i64>(Variant::Iterative);
    let recursive = algorithm.engine::<i64>(Variant::Recursive);

    sizes
        .iter()
        .map(|&n| {
            let data = source.random_sequence(n);
            let iterative_ms = time_ms(repeats, || iterative(black_box(&data)));
            let recursive_ms = time_ms(repeats, || recursive(black_box(&data)));
            record(algorithm_family(algorithm), n, recursive_ms, iterative_ms)
        })
        .collect()
}

/// Times both bubble sort variants on one unsorted dataset per size.
///
/// Each variant's mean is taken over `repeats` runs on the same dataset.
///
/// # Example
///
/// ```
/// use algobench_benchmark::{benchmark_sorting, DataSource};
///
/// let mut source = DataSource::seeded(42);
/// let results = benchmark_sorting(&[10, 20], 3, &mut source);
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].n, 10);
/// assert_eq!(results[1].n, 20);
/// ```
pub fn benchmark_sorting<R: Rng>(
    sizes: &[usize],
    repeats: usize,
    source: &mut DataSource<R>,
) -> Vec<BenchmarkResult> {
    sort_results(SortAlgorithm::Bubble, sizes, repeats, source)
}

/// Times both merge sort variants, like [`benchmark_sorting`].
pub fn benchmark_merge_sorting<R: Rng>(
    sizes: &[usize],
    repeats: usize,
    source: &mut DataSource<R>,
) -> Vec<BenchmarkResult> {
    sort_results(SortAlgorithm::Merge, sizes, repeats, source)
}

/// Times both binary search variants on one sorted dataset per size.
///
/// `repeats` targets are drawn from the dataset and each is searched once
/// per variant; the per-size time is the mean over targets. A size of zero
/// yields no targets and `0.0` means.
pub fn benchmark_searching<R: Rng>(
    sizes: &[usize],
    repeats: usize,
    source: &mut DataSource<R>,
) -> Vec<BenchmarkResult> {
    let iterative = search::engine::<i64>(Variant::Iterative);
    let recursive = search::engine::<i64>(Variant::Recursive);

    sizes
        .iter()
        .map(|&n| {
            let data = source.sorted_sequence(n);
            let targets = source.sample_targets(&data, repeats);
            let iterative_ms = time_each_ms(&targets, |t| iterative(black_box(&data), t));
            let recursive_ms = time_each_ms(&targets, |t| recursive(black_box(&data), t));
            record(Family::BinarySearch, n, recursive_ms, iterative_ms)
        })
        .collect()
}

fn algorithm_family(algorithm: SortAlgorithm) -> Family {
    match algorithm {
        SortAlgorithm::Bubble => Family::BubbleSort,
        SortAlgorithm::Merge => Family::MergeSort,
    }
}

fn record(family: Family, n: usize, recursive_ms: f64, iterative_ms: f64) -> BenchmarkResult {
    info!(
        event = "size_measured",
        family = family.key(),
        n = n as u64,
        recursive_ms,
        iterative_ms,
    );
    BenchmarkResult::new(n, recursive_ms, iterative_ms)
}

/// Benchmark driver bound to a configuration and a data source.
///
/// The data source is kept across [`run`](Self::run) calls, so one seeded
/// benchmark reproduces the same inputs for a whole session.
///
/// # Type Parameters
///
/// * `R` - The random generator behind the data source
pub struct Benchmark<R> {
    config: BenchmarkConfig,
    source: DataSource<R>,
}

impl Benchmark<ChaCha8Rng> {
    /// Creates a benchmark whose data source is seeded from the config.
    pub fn seeded(config: BenchmarkConfig) -> Self {
        let source = DataSource::seeded(config.seed()).with_max_value(config.max_value());
        Self::new(config, source)
    }
}

impl<R: Rng> Benchmark<R> {
    /// Creates a benchmark drawing its inputs from `source`.
    pub fn new(config: BenchmarkConfig, source: DataSource<R>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Measures `family` at every size and returns the series.
    pub fn run(&mut self, family: Family, sizes: &[usize]) -> BenchmarkSeries {
        let repeats = self.config.repeats();
        info!(
            event = "benchmark_start",
            family = family.key(),
            sizes = ?sizes,
            repeats = repeats as u64,
            seed = self.config.seed(),
        );

        if family == Family::BubbleSort {
            for &n in sizes.iter().filter(|&&n| n > DEEP_RECURSION_LEN) {
                warn!(
                    event = "deep_recursion",
                    family = family.key(),
                    n = n as u64,
                    limit = DEEP_RECURSION_LEN as u64,
                    "Recursive bubble sort nests once per element and may overflow the stack"
                );
            }
        }

        let start = Instant::now();
        let results = match family {
            Family::BubbleSort => benchmark_sorting(sizes, repeats, &mut self.source),
            Family::MergeSort => benchmark_merge_sorting(sizes, repeats, &mut self.source),
            Family::BinarySearch => benchmark_searching(sizes, repeats, &mut self.source),
        };

        let mut series =
            BenchmarkSeries::new(self.config.name(), family, repeats, self.config.seed());
        for result in results {
            series.add_result(result);
        }

        info!(
            event = "benchmark_end",
            family = family.key(),
            results = series.len() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );
        series
    }
}

/// Builder for creating benchmarks with fluent API.
pub struct BenchmarkBuilder {
    config: BenchmarkConfig,
}

impl BenchmarkBuilder {
    /// Creates a new benchmark builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: BenchmarkConfig::new(name),
        }
    }

    /// Sets the repeat count.
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.config = self.config.with_repeats(repeats);
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Sets the largest generated value.
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.config = self.config.with_max_value(max_value);
        self
    }

    /// Builds a benchmark with a seeded ChaCha8 data source.
    pub fn build(self) -> Benchmark<ChaCha8Rng> {
        Benchmark::seeded(self.config)
    }

    /// Builds a benchmark drawing from the given generator.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Benchmark<R> {
        let source = DataSource::new(rng).with_max_value(self.config.max_value());
        Benchmark::new(self.config, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn non_negative(results: &[BenchmarkResult]) -> bool {
        results
            .iter()
            .all(|r| r.recursive_ms >= 0.0 && r.iterative_ms >= 0.0)
    }

    #[test]
    fn test_sorting_one_result_per_size() {
        let mut source = DataSource::seeded(42);
        let results = benchmark_sorting(&[10, 20], 3, &mut source);
        assert_eq!(results.iter().map(|r| r.n).collect::<Vec<_>>(), vec![10, 20]);
        assert!(non_negative(&results));
    }

    #[test]
    fn test_merge_sorting_one_result_per_size() {
        let mut source = DataSource::seeded(42);
        let results = benchmark_merge_sorting(&[10, 20], 3, &mut source);
        assert_eq!(results.len(), 2);
        assert!(non_negative(&results));
    }

    #[test]
    fn test_searching_one_result_per_size() {
        let mut source = DataSource::seeded(42);
        let results = benchmark_searching(&[10, 15, 30], 3, &mut source);
        assert_eq!(results.iter().map(|r| r.n).collect::<Vec<_>>(), vec![10, 15, 30]);
        assert!(non_negative(&results));
    }

    #[test]
    fn test_search_size_zero_is_zero() {
        let mut source = DataSource::seeded(42);
        let results = benchmark_searching(&[0], 5, &mut source);
        assert_eq!(results, vec![BenchmarkResult::new(0, 0.0, 0.0)]);
    }

    #[test]
    fn test_zero_repeats_is_zero() {
        let mut source = DataSource::seeded(42);
        let results = benchmark_sorting(&[10], 0, &mut source);
        assert_eq!(results, vec![BenchmarkResult::new(10, 0.0, 0.0)]);
    }

    #[test]
    fn test_request_order_is_preserved() {
        let mut source = DataSource::seeded(42);
        let results = benchmark_merge_sorting(&[30, 10, 20], 1, &mut source);
        assert_eq!(results.iter().map(|r| r.n).collect::<Vec<_>>(), vec![30, 10, 20]);
    }

    #[test]
    fn test_benchmark_run_series() {
        let mut benchmark = BenchmarkBuilder::new("Test").with_repeats(2).build();
        let series = benchmark.run(Family::BubbleSort, &[10, 20]);
        assert_eq!(series.family, Family::BubbleSort);
        assert_eq!(series.name, "Test");
        assert_eq!(series.repeats, 2);
        assert_eq!(series.seed, 42);
        assert_eq!(series.sizes(), vec![10, 20]);
    }

    #[test]
    fn test_build_with_injected_rng() {
        let rng = ChaCha8Rng::seed_from_u64(9);
        let mut benchmark = BenchmarkBuilder::new("Injected")
            .with_repeats(1)
            .with_max_value(10)
            .build_with_rng(rng);
        let series = benchmark.run(Family::BinarySearch, &[4, 8]);
        assert_eq!(series.len(), 2);
        assert_eq!(benchmark.config().max_value(), 10);
    }
}
