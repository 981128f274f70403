//! Benchmark result types.

use std::fmt;

use serde::{Deserialize, Serialize};

use algobench_core::{SortAlgorithm, Variant};

/// A group of algorithms measured together, recursive against iterative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    BubbleSort,
    MergeSort,
    BinarySearch,
}

impl Family {
    /// All families, in presentation order.
    pub const ALL: [Family; 3] = [Family::BubbleSort, Family::MergeSort, Family::BinarySearch];

    /// Human-readable algorithm name, e.g. "Bubble Sort".
    pub fn name(self) -> &'static str {
        match self {
            Family::BubbleSort => SortAlgorithm::Bubble.name(),
            Family::MergeSort => SortAlgorithm::Merge.name(),
            Family::BinarySearch => "Binary Search",
        }
    }

    /// Stable identifier used in logs and exports.
    pub fn key(self) -> &'static str {
        match self {
            Family::BubbleSort => "bubble_sort",
            Family::MergeSort => "merge_sort",
            Family::BinarySearch => "binary_search",
        }
    }

    /// Heading of the per-size results listing.
    pub fn performance_heading(self) -> String {
        format!("{} PERFORMANCE", self.name().to_uppercase())
    }

    /// Title of the comparison table.
    pub fn table_title(self) -> String {
        format!(
            "PERFORMANCE COMPARISON: {} (Recursive vs Iterative)",
            self.name()
        )
    }

    /// Title of the chart panel.
    pub fn chart_title(self) -> String {
        format!("{}: Iterative vs Recursive", self.name())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean timings for one input size.
///
/// Both times are arithmetic means in milliseconds and never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Input size.
    pub n: usize,
    /// Mean time of the recursive variant.
    pub recursive_ms: f64,
    /// Mean time of the iterative variant.
    pub iterative_ms: f64,
}

impl BenchmarkResult {
    pub fn new(n: usize, recursive_ms: f64, iterative_ms: f64) -> Self {
        Self {
            n,
            recursive_ms,
            iterative_ms,
        }
    }

    /// Returns the mean time of `variant`.
    pub fn time_ms(&self, variant: Variant) -> f64 {
        match variant {
            Variant::Recursive => self.recursive_ms,
            Variant::Iterative => self.iterative_ms,
        }
    }

    /// Returns the faster variant, or `None` on a tie.
    ///
    /// # Example
    ///
    /// ```
    /// use algobench_benchmark::BenchmarkResult;
    /// use algobench_core::Variant;
    ///
    /// let result = BenchmarkResult::new(10, 0.5, 0.25);
    /// assert_eq!(result.faster(), Some(Variant::Iterative));
    /// assert_eq!(BenchmarkResult::new(10, 0.0, 0.0).faster(), None);
    /// ```
    pub fn faster(&self) -> Option<Variant> {
        if self.recursive_ms < self.iterative_ms {
            Some(Variant::Recursive)
        } else if self.iterative_ms < self.recursive_ms {
            Some(Variant::Iterative)
        } else {
            None
        }
    }
}

/// Results of one family across all requested sizes.
///
/// Results keep the order in which sizes were requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSeries {
    /// Benchmark name.
    pub name: String,
    /// Family measured.
    pub family: Family,
    /// Timed repetitions per size.
    pub repeats: usize,
    /// Seed the datasets were drawn from.
    pub seed: u64,
    /// One result per size.
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkSeries {
    /// Creates an empty series.
    pub fn new(name: impl Into<String>, family: Family, repeats: usize, seed: u64) -> Self {
        Self {
            name: name.into(),
            family,
            repeats,
            seed,
            results: Vec::new(),
        }
    }

    /// Adds a result to the series.
    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the measured sizes in request order.
    pub fn sizes(&self) -> Vec<usize> {
        self.results.iter().map(|r| r.n).collect()
    }

    /// Returns the average over all sizes of `variant`'s mean time.
    ///
    /// # Example
    ///
    /// ```
    /// use algobench_benchmark::{BenchmarkResult, BenchmarkSeries, Family};
    /// use algobench_core::Variant;
    ///
    /// let mut series = BenchmarkSeries::new("Test", Family::BubbleSort, 3, 42);
    /// series.add_result(BenchmarkResult::new(10, 1.0, 0.5));
    /// series.add_result(BenchmarkResult::new(20, 3.0, 1.5));
    ///
    /// assert!((series.avg_ms(Variant::Recursive) - 2.0).abs() < 1e-9);
    /// assert!((series.avg_ms(Variant::Iterative) - 1.0).abs() < 1e-9);
    /// ```
    pub fn avg_ms(&self, variant: Variant) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let total: f64 = self.results.iter().map(|r| r.time_ms(variant)).sum();
        total / self.results.len() as f64
    }

    /// Returns the largest mean time of either variant.
    pub fn max_ms(&self) -> f64 {
        self.results
            .iter()
            .map(|r| r.recursive_ms.max(r.iterative_ms))
            .fold(0.0, f64::max)
    }

    /// Returns the variant that was faster at more sizes, or `None` if
    /// neither was.
    pub fn overall_faster(&self) -> Option<Variant> {
        let (mut recursive, mut iterative) = (0usize, 0usize);
        for result in &self.results {
            match result.faster() {
                Some(Variant::Recursive) => recursive += 1,
                Some(Variant::Iterative) => iterative += 1,
                None => {}
            }
        }
        match recursive.cmp(&iterative) {
            std::cmp::Ordering::Greater => Some(Variant::Recursive),
            std::cmp::Ordering::Less => Some(Variant::Iterative),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> BenchmarkSeries {
        let mut series = BenchmarkSeries::new("Test", Family::BinarySearch, 5, 42);
        series.add_result(BenchmarkResult::new(30, 0.004, 0.002));
        series.add_result(BenchmarkResult::new(10, 0.001, 0.003));
        series.add_result(BenchmarkResult::new(20, 0.006, 0.001));
        series
    }

    #[test]
    fn test_series_keeps_request_order() {
        assert_eq!(series().sizes(), vec![30, 10, 20]);
    }

    #[test]
    fn test_max_ms() {
        assert!((series().max_ms() - 0.006).abs() < 1e-12);
        assert_eq!(BenchmarkSeries::new("E", Family::MergeSort, 1, 0).max_ms(), 0.0);
    }

    #[test]
    fn test_overall_faster() {
        assert_eq!(series().overall_faster(), Some(Variant::Iterative));
        assert_eq!(
            BenchmarkSeries::new("E", Family::MergeSort, 1, 0).overall_faster(),
            None
        );
    }

    #[test]
    fn test_empty_series_averages_zero() {
        let series = BenchmarkSeries::new("E", Family::BubbleSort, 1, 0);
        assert!(series.is_empty());
        assert_eq!(series.avg_ms(Variant::Recursive), 0.0);
    }

    #[test]
    fn test_family_titles() {
        assert_eq!(Family::BubbleSort.performance_heading(), "BUBBLE SORT PERFORMANCE");
        assert_eq!(
            Family::BinarySearch.table_title(),
            "PERFORMANCE COMPARISON: Binary Search (Recursive vs Iterative)"
        );
        assert_eq!(Family::MergeSort.chart_title(), "Merge Sort: Iterative vs Recursive");
    }
}
