//! Logging Tests

use bindery_infrastructure::constants::DEFAULT_LOG_LEVEL;
use bindery_infrastructure::logging::{LoggingConfig, init_logging, level_filter, parse_log_level};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_level_filter_uses_parsed_level() {
    let warning = level_filter(parse_log_level("warning").unwrap());
    assert_eq!(warning.max_level_hint(), Some(LevelFilter::WARN));

    let debug = level_filter(parse_log_level("DEBUG").unwrap());
    assert_eq!(debug.max_level_hint(), Some(LevelFilter::DEBUG));
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

#[test]
fn test_second_initialization_returns_error() {
    let config = LoggingConfig::default();
    // The first call may already lose to another test's subscriber
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}
