//! Report generation for benchmark results.

use std::fmt::{self, Display};
use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use algobench_core::Variant;

use crate::error::ReportError;
use crate::result::{BenchmarkResult, BenchmarkSeries};

const MIN_COLUMN_WIDTH: usize = 12;
const HEADERS: [&str; 3] = ["n", "Recursive time (ms)", "Iterative time (ms)"];

/// Per-size listing of every non-empty series, one line per size.
///
/// # Example
///
/// ```
/// use algobench_benchmark::{BenchmarkResult, BenchmarkSeries, Family, ResultListing};
///
/// let mut series = BenchmarkSeries::new("Test", Family::BubbleSort, 5, 42);
/// series.add_result(BenchmarkResult::new(10, 0.0125, 0.004));
///
/// let text = ResultListing::new(&[series]).to_string();
/// assert!(text.contains("BUBBLE SORT PERFORMANCE"));
/// assert!(text.contains("n=   10  recursive=0.012500 ms  iterative=0.004000 ms"));
/// ```
pub struct ResultListing<'a> {
    series: &'a [BenchmarkSeries],
}

impl<'a> ResultListing<'a> {
    pub fn new(series: &'a [BenchmarkSeries]) -> Self {
        Self { series }
    }
}

impl Display for ResultListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for series in self.series.iter().filter(|s| !s.is_empty()) {
            writeln!(f)?;
            writeln!(f, "{}", series.family.performance_heading())?;
            for r in &series.results {
                writeln!(
                    f,
                    "n={:5}  recursive={:.6} ms  iterative={:.6} ms",
                    r.n, r.recursive_ms, r.iterative_ms
                )?;
            }
        }
        Ok(())
    }
}

/// Fixed-width comparison table with centered cells.
///
/// Columns are at least 12 characters wide and grow to fit the longest
/// cell. Times are shown with six decimals.
///
/// # Example
///
/// ```
/// use algobench_benchmark::{AsciiTable, BenchmarkResult};
///
/// let results = [BenchmarkResult::new(10, 0.5, 0.25)];
/// let table = AsciiTable::new("Demo", &results).to_string();
/// let lines: Vec<&str> = table.lines().collect();
///
/// assert_eq!(lines[0], "Demo [avg ms]");
/// assert_eq!(lines[1], "+--------------+---------------------+---------------------+");
/// assert!(lines[2].starts_with("|      n       | Recursive time (ms) |"));
/// assert!(table.contains("0.500000"));
/// ```
pub struct AsciiTable<'a> {
    title: String,
    results: &'a [BenchmarkResult],
}

impl<'a> AsciiTable<'a> {
    pub fn new(title: impl Into<String>, results: &'a [BenchmarkResult]) -> Self {
        Self {
            title: title.into(),
            results,
        }
    }

    /// Creates a table titled after the series' family.
    pub fn for_series(series: &'a BenchmarkSeries) -> Self {
        Self::new(series.family.table_title(), &series.results)
    }

    fn cells(result: &BenchmarkResult) -> [String; 3] {
        [
            result.n.to_string(),
            format!("{:.6}", result.recursive_ms),
            format!("{:.6}", result.iterative_ms),
        ]
    }

    fn column_widths(&self) -> [usize; 3] {
        let mut widths = HEADERS.map(|h| h.len().max(MIN_COLUMN_WIDTH));
        for result in self.results {
            for (width, cell) in widths.iter_mut().zip(Self::cells(result)) {
                *width = (*width).max(cell.len());
            }
        }
        widths
    }
}

impl Display for AsciiTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.results.is_empty() {
            return writeln!(f, "{}: (no data)", self.title);
        }

        let widths = self.column_widths();
        let rule = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");

        writeln!(f, "{} [avg ms]", self.title)?;
        writeln!(f, "+{rule}+")?;
        write_row(f, HEADERS, widths)?;
        writeln!(f, "+{rule}+")?;
        for result in self.results {
            let cells = Self::cells(result);
            write_row(f, [cells[0].as_str(), cells[1].as_str(), cells[2].as_str()], widths)?;
        }
        writeln!(f, "+{rule}+")
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: [&str; 3], widths: [usize; 3]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:^w$}"))
        .collect();
    writeln!(f, "| {} |", padded.join(" | "))
}

fn write_report(path: &Path, format: &str, contents: &str) -> io::Result<()> {
    fs::write(path, contents)?;
    info!(
        event = "report_written",
        format,
        path = %path.display(),
    );
    Ok(())
}

/// CSV exporter for benchmark results.
///
/// One row per family and size: `family,n,recursive_ms,iterative_ms`.
///
/// # Example
///
/// ```
/// use algobench_benchmark::{BenchmarkResult, BenchmarkSeries, CsvExporter, Family};
///
/// let mut series = BenchmarkSeries::new("Test", Family::MergeSort, 3, 42);
/// series.add_result(BenchmarkResult::new(20, 0.1, 0.05));
///
/// let csv = CsvExporter::to_string(&[series]);
/// assert!(csv.starts_with("family,n,recursive_ms,iterative_ms\n"));
/// assert!(csv.contains("merge_sort,20,0.100000,0.050000"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark series to a CSV string.
    pub fn to_string(series: &[BenchmarkSeries]) -> String {
        let mut output = String::from("family,n,recursive_ms,iterative_ms\n");
        for s in series {
            for r in &s.results {
                output.push_str(&format!(
                    "{},{},{:.6},{:.6}\n",
                    s.family.key(),
                    r.n,
                    r.recursive_ms,
                    r.iterative_ms
                ));
            }
        }
        output
    }

    /// Exports benchmark series to a CSV file.
    pub fn to_file(series: &[BenchmarkSeries], path: impl AsRef<Path>) -> io::Result<()> {
        write_report(path.as_ref(), "csv", &Self::to_string(series))
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use algobench_benchmark::{BenchmarkResult, BenchmarkSeries, Family, MarkdownReport};
///
/// let mut series = BenchmarkSeries::new("Test", Family::BinarySearch, 5, 42);
/// series.add_result(BenchmarkResult::new(100, 0.002, 0.001));
///
/// let md = MarkdownReport::to_string(&series);
/// assert!(md.contains("# Benchmark: Test - Binary Search"));
/// assert!(md.contains("| n | Recursive (ms) | Iterative (ms) | Faster |"));
/// assert!(md.contains("| 100 | 0.002000 | 0.001000 | Iterative |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string for one series.
    pub fn to_string(series: &BenchmarkSeries) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "# Benchmark: {} - {}\n\n",
            series.name, series.family
        ));
        output.push_str(&format!("- **Repeats**: {}\n", series.repeats));
        output.push_str(&format!("- **Seed**: {}\n", series.seed));
        output.push_str(&format!("- **Sizes**: {}\n\n", series.len()));

        output.push_str("## Summary\n\n");
        if series.is_empty() {
            output.push_str("*No sizes measured.*\n\n");
            return output;
        }

        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Avg Recursive | {:.6} ms |\n",
            series.avg_ms(Variant::Recursive)
        ));
        output.push_str(&format!(
            "| Avg Iterative | {:.6} ms |\n",
            series.avg_ms(Variant::Iterative)
        ));
        output.push_str(&format!(
            "| Faster Overall | {} |\n\n",
            faster_label(series.overall_faster())
        ));

        output.push_str("## Results\n\n");
        output.push_str("| n | Recursive (ms) | Iterative (ms) | Faster |\n");
        output.push_str("|---|----------------|----------------|--------|\n");
        for r in &series.results {
            output.push_str(&format!(
                "| {} | {:.6} | {:.6} | {} |\n",
                r.n,
                r.recursive_ms,
                r.iterative_ms,
                faster_label(r.faster())
            ));
        }

        output
    }

    /// Generates a comparison table across several series.
    ///
    /// # Example
    ///
    /// ```
    /// use algobench_benchmark::{BenchmarkSeries, Family, MarkdownReport};
    ///
    /// let sort = BenchmarkSeries::new("Test", Family::BubbleSort, 5, 42);
    /// let search = BenchmarkSeries::new("Test", Family::BinarySearch, 5, 42);
    ///
    /// let comparison = MarkdownReport::comparison(&[&sort, &search]);
    /// assert!(comparison.contains("## Comparison"));
    /// assert!(comparison.contains("| Binary Search | 0 |"));
    /// ```
    pub fn comparison(series: &[&BenchmarkSeries]) -> String {
        let mut output = String::new();

        output.push_str("## Comparison\n\n");
        output.push_str("| Family | Sizes | Avg Recursive (ms) | Avg Iterative (ms) | Faster |\n");
        output.push_str("|--------|-------|--------------------|--------------------|--------|\n");
        for s in series {
            output.push_str(&format!(
                "| {} | {} | {:.6} | {:.6} | {} |\n",
                s.family,
                s.len(),
                s.avg_ms(Variant::Recursive),
                s.avg_ms(Variant::Iterative),
                faster_label(s.overall_faster())
            ));
        }

        output
    }

    /// Writes a full report (every series plus the comparison) to a file.
    pub fn to_file(series: &[BenchmarkSeries], path: impl AsRef<Path>) -> io::Result<()> {
        write_report(path.as_ref(), "markdown", &Self::full_report(series))
    }

    fn full_report(series: &[BenchmarkSeries]) -> String {
        let mut output = String::new();
        for s in series {
            output.push_str(&Self::to_string(s));
            output.push('\n');
        }
        let refs: Vec<&BenchmarkSeries> = series.iter().collect();
        output.push_str(&Self::comparison(&refs));
        output
    }
}

fn faster_label(variant: Option<Variant>) -> &'static str {
    variant.map_or("Tie", Variant::label)
}

/// JSON exporter for benchmark results.
pub struct JsonExporter;

impl JsonExporter {
    /// Serializes the series as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Json`] if serialization fails.
    pub fn to_string(series: &[BenchmarkSeries]) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(series)?)
    }

    /// Writes the series as JSON to a file.
    pub fn to_file(series: &[BenchmarkSeries], path: impl AsRef<Path>) -> Result<(), ReportError> {
        let json = Self::to_string(series)?;
        write_report(path.as_ref(), "json", &json)?;
        Ok(())
    }
}
