use crate::config::{LogFormat, LogLevel, LoggingConfig};
use crate::logging::{LogError, create_non_blocking_file, level_to_log_level, parse_log_level};
use std::io::Write;
use std::sync::Once;
use tempfile::tempdir;

// Use this to ensure init is only called once across all tests
static INIT: Once = Once::new();

#[test]
fn test_init_console_logging_is_idempotent() {
    INIT.call_once(|| {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Compact,
            file: None,
            stdout: false,
        };

        let _guard = crate::logging::init(&config).unwrap();
    });

    // A second install is a no-op rather than an error
    let config = LoggingConfig {
        format: LogFormat::Json,
        ..LoggingConfig::default()
    };
    assert!(crate::logging::init(&config).is_ok());
}

#[test]
fn test_file_writer_creates_directories() {
    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("nested").join("scout.log");

    let (mut writer, guard) = create_non_blocking_file(&log_path).unwrap();
    writer.write_all(b"ranked 2 candidates\n").unwrap();
    drop(writer);
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(contents, "ranked 2 candidates\n");
}

#[test]
fn test_file_writer_rejects_directory_path() {
    let result = create_non_blocking_file("/");
    assert!(matches!(result, Err(LogError::IoError(_))));
}

#[test]
fn test_level_conversion() {
    assert_eq!(parse_log_level("trace").unwrap(), LogLevel::Trace);
    assert_eq!(parse_log_level("DEBUG").unwrap(), LogLevel::Debug);
    assert_eq!(parse_log_level("info").unwrap(), LogLevel::Info);
    assert_eq!(parse_log_level("warning").unwrap(), LogLevel::Warn);
    assert_eq!(parse_log_level("error").unwrap(), LogLevel::Error);

    let err = parse_log_level("loud").unwrap_err();
    assert_eq!(err.to_string(), "Invalid log level: loud");

    assert_eq!(level_to_log_level(tracing::Level::TRACE), LogLevel::Trace);
    assert_eq!(level_to_log_level(tracing::Level::DEBUG), LogLevel::Debug);
    assert_eq!(level_to_log_level(tracing::Level::INFO), LogLevel::Info);
    assert_eq!(level_to_log_level(tracing::Level::WARN), LogLevel::Warn);
    assert_eq!(level_to_log_level(tracing::Level::ERROR), LogLevel::Error);
}
