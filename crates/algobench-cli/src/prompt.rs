//! Interactive prompts.

use std::io;

use dialoguer::Input;

use algobench_config::{
    parse_positive_int, parse_sizes, parse_yes_no, SessionConfig, DEFAULT_REPEATS,
    DEFAULT_SEARCH_SIZES, DEFAULT_SORT_SIZES,
};

/// Source of answers to text prompts.
pub trait Prompter {
    /// Asks `prompt` and returns the raw answer.
    ///
    /// An interrupted prompt returns an error of kind
    /// [`io::ErrorKind::Interrupted`].
    fn ask(&mut self, prompt: &str) -> io::Result<String>;

    /// Asks a yes/no question; an empty answer means yes.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(parse_yes_no(&self.ask(prompt)?))
    }
}

/// Reads answers from the terminal.
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(into_io_error)
    }
}

fn into_io_error(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(e) => e,
    }
}

/// Asks for families, sizes and repeats, starting from `base` for
/// everything the prompts do not cover.
pub fn interactive_config<P: Prompter>(
    prompter: &mut P,
    base: SessionConfig,
) -> io::Result<SessionConfig> {
    let run_sort = prompter.confirm("Run Bubble Sort benchmark? (y/n) [y]")?;
    let run_merge = prompter.confirm("Run Merge Sort benchmark? (y/n) [y]")?;
    let run_search = prompter.confirm("Run Binary Search benchmark? (y/n) [y]")?;

    let mut config = base.with_families(run_sort, run_merge, run_search);

    if run_sort || run_merge {
        let answer = prompter.ask(&format!(
            "Sort data sizes (separate with spaces) or press Enter for default {:?}",
            DEFAULT_SORT_SIZES
        ))?;
        config = config.with_sort_sizes(parse_sizes(&answer, &DEFAULT_SORT_SIZES));
    }

    if run_search {
        let answer = prompter.ask(&format!(
            "Binary Search data sizes (separate with spaces) or press Enter for default {:?}",
            DEFAULT_SEARCH_SIZES
        ))?;
        config = config.with_search_sizes(parse_sizes(&answer, &DEFAULT_SEARCH_SIZES));
    }

    let answer = prompter.ask(&format!(
        "Number of repeats to average [default {DEFAULT_REPEATS}]"
    ))?;
    Ok(config.with_repeats(parse_positive_int(&answer, DEFAULT_REPEATS)))
}

/// Replays canned answers; running out behaves like an interrupt.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Interrupted, "no more answers"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_defaults() {
        let mut prompter = ScriptedPrompter::new(["", "", "", "", "", ""]);
        let config = interactive_config(&mut prompter, SessionConfig::new()).unwrap();

        assert!(config.run_sort && config.run_merge && config.run_search);
        assert_eq!(config.sort_sizes, DEFAULT_SORT_SIZES.to_vec());
        assert_eq!(config.search_sizes, DEFAULT_SEARCH_SIZES.to_vec());
        assert_eq!(config.repeats, DEFAULT_REPEATS);
        assert_eq!(prompter.asked.len(), 6);
    }

    #[test]
    fn test_search_only_skips_sort_sizes() {
        let mut prompter = ScriptedPrompter::new(["n", "no", "y", "30 10", "3"]);
        let config = interactive_config(&mut prompter, SessionConfig::new()).unwrap();

        assert!(!config.run_sort && !config.run_merge && config.run_search);
        assert_eq!(config.search_sizes, vec![10, 30]);
        assert_eq!(config.repeats, 3);
        assert!(prompter.asked[3].starts_with("Binary Search data sizes"));
    }

    #[test]
    fn test_invalid_answers_fall_back() {
        let mut prompter = ScriptedPrompter::new(["y", "n", "n", "ten", "-"]);
        let config = interactive_config(&mut prompter, SessionConfig::new()).unwrap();

        assert_eq!(config.sort_sizes, DEFAULT_SORT_SIZES.to_vec());
        assert_eq!(config.repeats, DEFAULT_REPEATS);
    }

    #[test]
    fn test_dialoguer_error_keeps_kind() {
        let err = dialoguer::Error::from(io::Error::new(
            io::ErrorKind::Interrupted,
            "read interrupted",
        ));
        assert_eq!(into_io_error(err).kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn test_interrupt_propagates() {
        let mut prompter = ScriptedPrompter::new(["y"]);
        let err = interactive_config(&mut prompter, SessionConfig::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
    }
}
