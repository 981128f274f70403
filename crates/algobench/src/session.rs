//! Runs every family a [`SessionConfig`] enables.

use tracing::{info, warn};

use algobench_benchmark::{
    BenchmarkBuilder, BenchmarkSeries, CsvExporter, Family, JsonExporter, MarkdownReport,
    ReportError, SvgChart,
};
use algobench_config::SessionConfig;

/// Runs the enabled families in presentation order and returns one series
/// per family.
///
/// A single seeded data source is shared by all families, so the same
/// configuration always measures the same inputs.
pub fn run_session(config: &SessionConfig) -> Vec<BenchmarkSeries> {
    let mut benchmark = BenchmarkBuilder::new("algobench")
        .with_repeats(config.repeats)
        .with_seed(config.seed)
        .build();

    let mut series = Vec::new();
    for family in Family::ALL {
        let (enabled, sizes) = match family {
            Family::BubbleSort => (config.run_sort, &config.sort_sizes),
            Family::MergeSort => (config.run_merge, &config.sort_sizes),
            Family::BinarySearch => (config.run_search, &config.search_sizes),
        };
        if enabled {
            series.push(benchmark.run(family, sizes));
        }
    }

    info!(event = "session_end", families = series.len() as u64);
    series
}

/// Writes the CSV, Markdown and JSON reports the configuration asks for.
///
/// The chart is written separately since it is opt-in at the end of an
/// interactive session.
///
/// # Errors
///
/// Returns the first [`ReportError`] encountered.
pub fn write_outputs(
    config: &SessionConfig,
    series: &[BenchmarkSeries],
) -> Result<(), ReportError> {
    if let Some(path) = &config.csv_path {
        CsvExporter::to_file(series, path)?;
    }
    if let Some(path) = &config.markdown_path {
        MarkdownReport::to_file(series, path)?;
    }
    if let Some(path) = &config.json_path {
        JsonExporter::to_file(series, path)?;
    }
    Ok(())
}

/// Writes the comparison chart to the configured path.
///
/// Returns `Ok(false)` without writing when no series has results.
pub fn write_chart(
    config: &SessionConfig,
    series: &[BenchmarkSeries],
) -> Result<bool, ReportError> {
    match SvgChart::new(series).to_file(&config.chart_path) {
        Ok(()) => Ok(true),
        Err(ReportError::EmptyChart) => {
            warn!(event = "chart_skipped", "No results to chart");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_enabled_families_in_order() {
        let config = SessionConfig::new()
            .with_families(true, true, true)
            .with_sort_sizes([10, 20])
            .with_search_sizes([10, 15, 30])
            .with_repeats(2);
        let series = run_session(&config);

        let families: Vec<Family> = series.iter().map(|s| s.family).collect();
        assert_eq!(
            families,
            vec![Family::BubbleSort, Family::MergeSort, Family::BinarySearch]
        );
        assert_eq!(series[1].sizes(), vec![10, 20]);
        assert_eq!(series[2].sizes(), vec![10, 15, 30]);
    }

    #[test]
    fn test_no_families() {
        let config = SessionConfig::new().with_families(false, false, false);
        assert!(run_session(&config).is_empty());
    }

    #[test]
    fn test_write_outputs_and_chart() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::new()
            .with_families(false, true, false)
            .with_sort_sizes([5, 10])
            .with_repeats(1)
            .with_chart(true, Some(dir.path().join("compare.svg")))
            .with_csv_output(dir.path().join("r.csv"))
            .with_markdown_output(dir.path().join("r.md"))
            .with_json_output(dir.path().join("r.json"));

        let series = run_session(&config);
        write_outputs(&config, &series).unwrap();
        assert!(write_chart(&config, &series).unwrap());

        for name in ["r.csv", "r.md", "r.json", "compare.svg"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn test_empty_chart_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig::new().with_chart(true, Some(dir.path().join("c.svg")));
        assert!(!write_chart(&config, &[]).unwrap());
        assert!(!dir.path().join("c.svg").exists());
    }
}
