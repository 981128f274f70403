//! algobench - Recursive vs Iterative Algorithm Benchmarks
//!
//! Times bubble sort, merge sort and binary search in their recursive and
//! iterative forms across a set of input sizes.
//!
//! # Example
//!
//! ```rust
//! use algobench::prelude::*;
//!
//! let config = SessionConfig::new()
//!     .with_families(true, false, false)
//!     .with_sort_sizes([10, 20])
//!     .with_repeats(3)
//!     .with_chart(false, None);
//!
//! let series = run_session(&config);
//! assert_eq!(series.len(), 1);
//! assert_eq!(series[0].family, Family::BubbleSort);
//! assert_eq!(series[0].sizes(), vec![10, 20]);
//! ```

// Engines
pub use algobench_core::{
    binary_search_iterative, binary_search_recursive, bubble_sort_iterative,
    bubble_sort_recursive, merge, merge_sort_iterative, merge_sort_recursive, search, sort,
    SortAlgorithm, Sequence, Variant,
};

// Harness and reports
pub use algobench_benchmark::{
    benchmark_merge_sorting, benchmark_searching, benchmark_sorting, time_ms, AsciiTable,
    Benchmark, BenchmarkBuilder, BenchmarkConfig, BenchmarkResult, BenchmarkSeries, CsvExporter,
    DataSource, Family, JsonExporter, MarkdownReport, ReportError, ResultListing, SvgChart,
};

// Session configuration
pub use algobench_config::{ConfigError, SessionConfig};

#[cfg(feature = "console")]
pub use algobench_console as console;

mod session;
pub use session::{run_session, write_chart, write_outputs};

pub mod prelude {
    pub use super::{run_session, write_chart, write_outputs};
    pub use super::{
        AsciiTable, BenchmarkResult, BenchmarkSeries, Family, ResultListing, SessionConfig,
        Variant,
    };
}
