//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use algobench_config::{
    parse_positive_int, parse_sizes, SessionConfig, DEFAULT_REPEATS, DEFAULT_SEARCH_SIZES,
    DEFAULT_SORT_SIZES,
};

/// Benchmark recursive vs iterative bubble sort, merge sort and binary search.
#[derive(Debug, Parser)]
#[command(name = "algobench", version, about)]
pub struct Cli {
    /// Ask for every setting interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Skip the bubble sort benchmark.
    #[arg(long)]
    pub no_sort: bool,

    /// Also run the merge sort benchmark.
    #[arg(long)]
    pub merge: bool,

    /// Skip the binary search benchmark.
    #[arg(long)]
    pub no_search: bool,

    /// Sort sizes, separated by spaces or commas ("default" for 10 20 30 50).
    #[arg(long, value_name = "SIZES")]
    pub sort_sizes: Option<String>,

    /// Search sizes, separated by spaces or commas ("default" for 10 15 30 100).
    #[arg(long, value_name = "SIZES")]
    pub search_sizes: Option<String>,

    /// Timed repetitions per size.
    #[arg(short, long, value_name = "N")]
    pub repeats: Option<String>,

    /// Seed for dataset generation and target sampling.
    #[arg(long, default_value_t = algobench_config::DEFAULT_SEED)]
    pub seed: u64,

    /// Do not write the comparison chart.
    #[arg(long)]
    pub no_chart: bool,

    /// Where to write the comparison chart.
    #[arg(long, value_name = "PATH")]
    pub chart_path: Option<PathBuf>,

    /// Also write results as CSV.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Also write a Markdown report.
    #[arg(long, value_name = "PATH")]
    pub markdown: Option<PathBuf>,

    /// Also write results as JSON.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Do not print the banner or progress events.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Builds the session configuration, falling back to defaults for any
    /// size or repeat text that does not parse.
    pub fn into_config(self) -> SessionConfig {
        let sort_sizes = parse_sizes(self.sort_sizes.as_deref().unwrap_or(""), &DEFAULT_SORT_SIZES);
        let search_sizes = parse_sizes(
            self.search_sizes.as_deref().unwrap_or(""),
            &DEFAULT_SEARCH_SIZES,
        );
        let repeats = parse_positive_int(self.repeats.as_deref().unwrap_or(""), DEFAULT_REPEATS);

        let mut config = SessionConfig::new()
            .with_families(!self.no_sort, self.merge, !self.no_search)
            .with_sort_sizes(sort_sizes)
            .with_search_sizes(search_sizes)
            .with_repeats(repeats)
            .with_seed(self.seed)
            .with_chart(!self.no_chart, self.chart_path);

        if let Some(path) = self.csv {
            config = config.with_csv_output(path);
        }
        if let Some(path) = self.markdown {
            config = config.with_markdown_output(path);
        }
        if let Some(path) = self.json {
            config = config.with_json_output(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = Cli::try_parse_from(["algobench"]).unwrap().into_config();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_flags() {
        let config = Cli::try_parse_from([
            "algobench",
            "--no-sort",
            "--merge",
            "--sort-sizes",
            "40,5 5",
            "--search-sizes",
            "d",
            "-r",
            "9",
            "--seed",
            "3",
            "--no-chart",
            "--json",
            "out.json",
        ])
        .unwrap()
        .into_config();

        assert!(!config.run_sort);
        assert!(config.run_merge);
        assert!(config.run_search);
        assert_eq!(config.sort_sizes, vec![5, 40]);
        assert_eq!(config.search_sizes, DEFAULT_SEARCH_SIZES.to_vec());
        assert_eq!(config.repeats, 9);
        assert_eq!(config.seed, 3);
        assert!(!config.chart);
        assert_eq!(config.json_path, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_invalid_text_falls_back() {
        let config = Cli::try_parse_from(["algobench", "--sort-sizes", "x y", "-r", "many"])
            .unwrap()
            .into_config();
        assert_eq!(config.sort_sizes, DEFAULT_SORT_SIZES.to_vec());
        assert_eq!(config.repeats, DEFAULT_REPEATS);
    }
}
