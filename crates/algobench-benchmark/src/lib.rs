//! Benchmarking harness for algobench.
//!
//! This crate measures the engines from `algobench-core` across a set of
//! input sizes and turns the measurements into tables, reports and charts.
//!
//! # Overview
//!
//! - [`time_ms`] runs a closure a number of times and returns the mean
//!   wall-clock duration in milliseconds
//! - [`DataSource`] generates datasets and search targets from an injected,
//!   seedable random generator
//! - [`benchmark_sorting`], [`benchmark_merge_sorting`] and
//!   [`benchmark_searching`] produce one [`BenchmarkResult`] per size
//! - [`Benchmark`] wraps those with a [`BenchmarkConfig`] and returns a
//!   [`BenchmarkSeries`] per [`Family`]
//! - [`AsciiTable`], [`CsvExporter`], [`MarkdownReport`], [`JsonExporter`]
//!   and [`SvgChart`] present the series
//!
//! # Example
//!
//! ```
//! use algobench_benchmark::{BenchmarkBuilder, Family};
//!
//! let mut benchmark = BenchmarkBuilder::new("Smoke")
//!     .with_repeats(3)
//!     .with_seed(42)
//!     .build();
//!
//! let series = benchmark.run(Family::MergeSort, &[10, 20]);
//! assert_eq!(series.sizes(), vec![10, 20]);
//! assert!(series.results.iter().all(|r| r.recursive_ms >= 0.0 && r.iterative_ms >= 0.0));
//! ```

mod chart;
mod config;
mod error;
mod random;
mod report;
mod result;
mod runner;
mod timing;

pub use chart::SvgChart;
pub use config::BenchmarkConfig;
pub use error::ReportError;
pub use random::{DataSource, MAX_VALUE};
pub use report::{AsciiTable, CsvExporter, JsonExporter, MarkdownReport, ResultListing};
pub use result::{BenchmarkResult, BenchmarkSeries, Family};
pub use runner::{
    benchmark_merge_sorting, benchmark_searching, benchmark_sorting, Benchmark, BenchmarkBuilder,
};
pub use timing::{mean_ms, sample_ms, time_each_ms, time_ms};
