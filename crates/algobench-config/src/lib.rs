//! Session configuration for algobench.
//!
//! A [`SessionConfig`] records which benchmark families to run, the input
//! sizes and repeat count for each, the random seed and where to write
//! reports. It is filled from command-line flags or prompt answers; there
//! are no configuration files.
//!
//! Textual input is read leniently: anything that cannot be parsed falls
//! back to a documented default with a `warn!` diagnostic instead of failing
//! the run.
//!
//! # Examples
//!
//! ```
//! use algobench_config::{parse_sizes, parse_positive_int, DEFAULT_SORT_SIZES};
//!
//! assert_eq!(parse_sizes("30, 10 20 10", &DEFAULT_SORT_SIZES), vec![10, 20, 30]);
//! assert_eq!(parse_sizes("", &DEFAULT_SORT_SIZES), DEFAULT_SORT_SIZES.to_vec());
//! assert_eq!(parse_sizes("ten", &DEFAULT_SORT_SIZES), DEFAULT_SORT_SIZES.to_vec());
//! assert_eq!(parse_positive_int("0", 5), 1);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Bubble and merge sort sizes used when none are given.
pub const DEFAULT_SORT_SIZES: [usize; 4] = [10, 20, 30, 50];

/// Binary search sizes used when none are given.
pub const DEFAULT_SEARCH_SIZES: [usize; 4] = [10, 15, 30, 100];

/// Repeat count used when none is given.
pub const DEFAULT_REPEATS: usize = 5;

/// Seed used when none is given, so default runs are reproducible.
pub const DEFAULT_SEED: u64 = 42;

/// Chart path used when none is given.
pub const DEFAULT_CHART_PATH: &str = "compare.svg";

/// Largest accepted input size. Larger text input is rejected, since a
/// dataset that size cannot be allocated.
pub const MAX_SIZE: usize = 10_000_000;

/// Largest accepted repeat count.
pub const MAX_REPEATS: usize = 1_000_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid size list {input:?}: {reason}")]
    InvalidSizes { input: String, reason: String },

    #[error("invalid positive integer {input:?}")]
    InvalidInteger { input: String },

    #[error("{input:?} exceeds the maximum of {max}")]
    OutOfRange { input: String, max: usize },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything one benchmark session needs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionConfig {
    /// Run the bubble sort family.
    #[serde(default = "default_true")]
    pub run_sort: bool,

    /// Run the merge sort family.
    #[serde(default)]
    pub run_merge: bool,

    /// Run the binary search family.
    #[serde(default = "default_true")]
    pub run_search: bool,

    /// Sizes for both sort families, ascending and deduplicated.
    #[serde(default = "default_sort_sizes")]
    pub sort_sizes: Vec<usize>,

    /// Sizes for the search family, ascending and deduplicated.
    #[serde(default = "default_search_sizes")]
    pub search_sizes: Vec<usize>,

    /// Timed repetitions per size.
    #[serde(default = "default_repeats")]
    pub repeats: usize,

    /// Seed for dataset generation and target sampling.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Render the comparison chart.
    #[serde(default = "default_true")]
    pub chart: bool,

    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,

    #[serde(default)]
    pub csv_path: Option<PathBuf>,

    #[serde(default)]
    pub markdown_path: Option<PathBuf>,

    #[serde(default)]
    pub json_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_sort_sizes() -> Vec<usize> {
    DEFAULT_SORT_SIZES.to_vec()
}

fn default_search_sizes() -> Vec<usize> {
    DEFAULT_SEARCH_SIZES.to_vec()
}

fn default_repeats() -> usize {
    DEFAULT_REPEATS
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_chart_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHART_PATH)
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            run_sort: true,
            run_merge: false,
            run_search: true,
            sort_sizes: default_sort_sizes(),
            search_sizes: default_search_sizes(),
            repeats: DEFAULT_REPEATS,
            seed: DEFAULT_SEED,
            chart: true,
            chart_path: default_chart_path(),
            csv_path: None,
            markdown_path: None,
            json_path: None,
        }
    }
}

impl SessionConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects which benchmark families run.
    ///
    /// # Example
    ///
    /// ```
    /// use algobench_config::SessionConfig;
    ///
    /// let config = SessionConfig::new().with_families(false, true, true);
    /// assert!(!config.run_sort);
    /// assert!(config.run_merge);
    /// assert!(config.any_family());
    /// ```
    pub fn with_families(mut self, sort: bool, merge: bool, search: bool) -> Self {
        self.run_sort = sort;
        self.run_merge = merge;
        self.run_search = search;
        self
    }

    /// Sets the sort sizes, normalizing them to an ascending set.
    pub fn with_sort_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.sort_sizes = normalize_sizes(sizes);
        self
    }

    /// Sets the search sizes, normalizing them to an ascending set.
    pub fn with_search_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.search_sizes = normalize_sizes(sizes);
        self
    }

    /// Sets the repeat count, clamped to `1..=MAX_REPEATS`.
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats.clamp(1, MAX_REPEATS);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables the chart, optionally moving it.
    pub fn with_chart(mut self, enabled: bool, path: Option<PathBuf>) -> Self {
        self.chart = enabled;
        if let Some(path) = path {
            self.chart_path = path;
        }
        self
    }

    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    pub fn with_markdown_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.markdown_path = Some(path.into());
        self
    }

    pub fn with_json_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = Some(path.into());
        self
    }

    /// Returns true if at least one family is enabled.
    pub fn any_family(&self) -> bool {
        self.run_sort || self.run_merge || self.run_search
    }

    /// Checks the invariants the builder methods maintain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the repeat count or a size is out
    /// of range, or a size list is not strictly ascending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeats == 0 || self.repeats > MAX_REPEATS {
            return Err(ConfigError::Invalid(format!(
                "repeats must be between 1 and {MAX_REPEATS}"
            )));
        }
        let lists = [
            ("sort_sizes", &self.sort_sizes),
            ("search_sizes", &self.search_sizes),
        ];
        for (name, sizes) in lists {
            if sizes.iter().any(|&n| n == 0 || n > MAX_SIZE) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be between 1 and {MAX_SIZE}"
                )));
            }
            if sizes.windows(2).any(|w| w[0] >= w[1]) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be ascending without duplicates"
                )));
            }
        }
        Ok(())
    }
}

/// Clamps sizes to `1..=MAX_SIZE`, then sorts and deduplicates them.
pub fn normalize_sizes(sizes: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut sizes: Vec<usize> = sizes.into_iter().map(|n| n.clamp(1, MAX_SIZE)).collect();
    sizes.sort_unstable();
    sizes.dedup();
    sizes
}

fn is_default_keyword(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("d") || s.eq_ignore_ascii_case("default")
}

/// Parses a size list, reporting unparsable text as an error.
///
/// Returns `Ok(None)` for empty text or the `d`/`default` keyword. Tokens
/// may be separated by whitespace and commas; fractional values are
/// truncated and anything below 1 becomes 1.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSizes`] if a token is not a number or is
/// above [`MAX_SIZE`].
pub fn try_parse_sizes(input: &str) -> Result<Option<Vec<usize>>, ConfigError> {
    let s = input.trim();
    if is_default_keyword(s) {
        return Ok(None);
    }

    let mut sizes = Vec::new();
    for token in s.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| ConfigError::InvalidSizes {
            input: s.to_string(),
            reason: format!("{token:?} is not a number"),
        })?;
        if !value.is_finite() {
            return Err(ConfigError::InvalidSizes {
                input: s.to_string(),
                reason: format!("{token:?} is not finite"),
            });
        }
        if value >= (MAX_SIZE + 1) as f64 {
            return Err(ConfigError::InvalidSizes {
                input: s.to_string(),
                reason: format!("{token:?} exceeds the maximum size of {MAX_SIZE}"),
            });
        }
        // Negatives saturate to 0 here, then clamp to 1 below.
        sizes.push(value.trunc() as usize);
    }

    if sizes.is_empty() {
        return Ok(None);
    }
    Ok(Some(normalize_sizes(sizes)))
}

/// Parses a size list, falling back to `default` on empty or invalid text.
pub fn parse_sizes(input: &str, default: &[usize]) -> Vec<usize> {
    match try_parse_sizes(input) {
        Ok(Some(sizes)) => sizes,
        Ok(None) => default.to_vec(),
        Err(e) => {
            warn!(
                event = "input_fallback",
                input = input.trim(),
                error = %e,
                fallback = ?default,
                "Invalid size input. Using default."
            );
            default.to_vec()
        }
    }
}

/// Parses a positive integer, reporting unparsable text as an error.
///
/// Returns `Ok(None)` for empty text or the `d`/`default` keyword. Values
/// below 1 are clamped to 1.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidInteger`] if the text is not an integer,
/// or [`ConfigError::OutOfRange`] if it is above [`MAX_REPEATS`].
pub fn try_parse_positive_int(input: &str) -> Result<Option<usize>, ConfigError> {
    let s = input.trim();
    if is_default_keyword(s) {
        return Ok(None);
    }

    let value: i64 = s.parse().map_err(|_| ConfigError::InvalidInteger {
        input: s.to_string(),
    })?;
    match usize::try_from(value.max(1)) {
        Ok(value) if value <= MAX_REPEATS => Ok(Some(value)),
        _ => Err(ConfigError::OutOfRange {
            input: s.to_string(),
            max: MAX_REPEATS,
        }),
    }
}

/// Parses a positive integer, falling back to `default` on empty or
/// invalid text.
pub fn parse_positive_int(input: &str, default: usize) -> usize {
    match try_parse_positive_int(input) {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            warn!(
                event = "input_fallback",
                input = input.trim(),
                error = %e,
                fallback = default,
                "Invalid input. Using default."
            );
            default
        }
    }
}

/// Reads a yes/no answer. Empty text, `y` and `yes` mean yes.
pub fn parse_yes_no(input: &str) -> bool {
    let s = input.trim();
    s.is_empty() || s.eq_ignore_ascii_case("y") || s.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests;
