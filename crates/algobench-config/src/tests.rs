//! Tests for session configuration and input parsing.

use super::*;

#[test]
fn test_defaults() {
    let config = SessionConfig::default();
    assert!(config.run_sort);
    assert!(!config.run_merge);
    assert!(config.run_search);
    assert_eq!(config.sort_sizes, vec![10, 20, 30, 50]);
    assert_eq!(config.search_sizes, vec![10, 15, 30, 100]);
    assert_eq!(config.repeats, 5);
    assert_eq!(config.seed, 42);
    assert_eq!(config.chart_path, PathBuf::from("compare.svg"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = SessionConfig::new()
        .with_sort_sizes([50, 10, 10, 0])
        .with_search_sizes([3])
        .with_repeats(0)
        .with_seed(7)
        .with_chart(false, Some(PathBuf::from("out.svg")))
        .with_csv_output("r.csv");

    assert_eq!(config.sort_sizes, vec![1, 10, 50]);
    assert_eq!(config.search_sizes, vec![3]);
    assert_eq!(config.repeats, 1);
    assert_eq!(config.seed, 7);
    assert!(!config.chart);
    assert_eq!(config.chart_path, PathBuf::from("out.svg"));
    assert_eq!(config.csv_path, Some(PathBuf::from("r.csv")));
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_sizes() {
    let mut config = SessionConfig::new();
    config.sort_sizes = vec![20, 10];
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = SessionConfig::new();
    config.search_sizes = vec![0, 4];
    assert!(config.validate().is_err());

    let mut config = SessionConfig::new();
    config.repeats = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_parse_sizes_separators_and_order() {
    let default = DEFAULT_SORT_SIZES;
    assert_eq!(parse_sizes("30 10 20", &default), vec![10, 20, 30]);
    assert_eq!(parse_sizes("30,10, 20", &default), vec![10, 20, 30]);
    assert_eq!(parse_sizes("  5,,5  5 ", &default), vec![5]);
}

#[test]
fn test_parse_sizes_clamps_and_truncates() {
    let default = DEFAULT_SORT_SIZES;
    assert_eq!(parse_sizes("-3 0 2.9", &default), vec![1, 2]);
    assert_eq!(parse_sizes("1e2", &default), vec![100]);
}

#[test]
fn test_parse_sizes_default_keywords() {
    let default = DEFAULT_SEARCH_SIZES;
    for input in ["", "   ", "d", "D", "default", "DEFAULT"] {
        assert_eq!(parse_sizes(input, &default), default.to_vec(), "{input:?}");
    }
}

#[test]
fn test_parse_sizes_invalid_falls_back() {
    let default = DEFAULT_SORT_SIZES;
    assert_eq!(parse_sizes("10 abc", &default), default.to_vec());
    assert!(matches!(
        try_parse_sizes("10 abc"),
        Err(ConfigError::InvalidSizes { .. })
    ));
    assert!(try_parse_sizes("inf").is_err());
}

#[test]
fn test_parse_sizes_rejects_oversized() {
    let default = DEFAULT_SORT_SIZES;
    assert_eq!(parse_sizes("1e30", &default), default.to_vec());
    assert_eq!(parse_sizes("10 20000000", &default), default.to_vec());
    assert_eq!(parse_sizes("10000000", &default), vec![MAX_SIZE]);
    assert!(matches!(
        try_parse_sizes("1e30"),
        Err(ConfigError::InvalidSizes { .. })
    ));
}

#[test]
fn test_builders_clamp_to_ceilings() {
    let config = SessionConfig::new()
        .with_sort_sizes([usize::MAX, 10])
        .with_repeats(usize::MAX);
    assert_eq!(config.sort_sizes, vec![10, MAX_SIZE]);
    assert_eq!(config.repeats, MAX_REPEATS);
    assert!(config.validate().is_ok());

    let mut config = SessionConfig::new();
    config.search_sizes = vec![10, MAX_SIZE + 1];
    assert!(config.validate().is_err());
}

#[test]
fn test_parse_positive_int() {
    assert_eq!(parse_positive_int("8", 5), 8);
    assert_eq!(parse_positive_int(" -4 ", 5), 1);
    assert_eq!(parse_positive_int("", 5), 5);
    assert_eq!(parse_positive_int("default", 5), 5);
    assert_eq!(parse_positive_int("2.5", 5), 5);
    assert!(matches!(
        try_parse_positive_int("x"),
        Err(ConfigError::InvalidInteger { .. })
    ));
}

#[test]
fn test_parse_positive_int_rejects_oversized() {
    assert_eq!(parse_positive_int("99999999999", 5), 5);
    assert_eq!(parse_positive_int("1000000", 5), MAX_REPEATS);
    assert!(matches!(
        try_parse_positive_int("1000001"),
        Err(ConfigError::OutOfRange { max: MAX_REPEATS, .. })
    ));
}

#[test]
fn test_parse_yes_no() {
    assert!(parse_yes_no(""));
    assert!(parse_yes_no("Y"));
    assert!(parse_yes_no(" yes "));
    assert!(!parse_yes_no("n"));
    assert!(!parse_yes_no("sure"));
}

#[test]
fn test_json_round_trip_fills_defaults() {
    let config: SessionConfig =
        serde_json::from_str(r#"{ "run_merge": true, "repeats": 3 }"#).unwrap();
    assert!(config.run_merge);
    assert!(config.run_sort);
    assert_eq!(config.repeats, 3);
    assert_eq!(config.sort_sizes, DEFAULT_SORT_SIZES.to_vec());
}
