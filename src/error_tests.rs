use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = QualMetricsError::Config("max_ngram must be between 1 and 8".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: max_ngram must be between 1 and 8"
    );
}

#[test]
fn error_display_not_found() {
    let err = QualMetricsError::NotFound {
        path: PathBuf::from("missing.rs"),
    };
    assert_eq!(err.to_string(), "file not found: missing.rs");
}

#[test]
fn error_display_file_read() {
    let err = QualMetricsError::FileRead {
        path: PathBuf::from("test.rs"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("test.rs"));
}

#[test]
fn error_display_usage_is_passthrough() {
    let err = QualMetricsError::Usage("Usage: qualmetrics comments <FILE>".to_string());
    assert_eq!(err.to_string(), "Usage: qualmetrics comments <FILE>");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(QualMetricsError::Usage(String::new()).error_type(), "Usage");
    assert_eq!(
        QualMetricsError::NotFound {
            path: PathBuf::from("a.rs")
        }
        .error_type(),
        "NotFound"
    );
    assert_eq!(
        QualMetricsError::Config("x".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        QualMetricsError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn io_error_message_is_not_repeated_in_source() {
    let err = QualMetricsError::from(std::io::Error::other("disk full"));

    assert_eq!(err.to_string(), "IO error");
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("disk full"));
}

#[test]
fn exit_codes_split_config_from_runtime_errors() {
    assert_eq!(
        QualMetricsError::Config("x".to_string()).exit_code(),
        crate::EXIT_CONFIG_ERROR
    );
    assert_eq!(
        QualMetricsError::NotFound {
            path: PathBuf::from("a.rs")
        }
        .exit_code(),
        crate::EXIT_FAILURE
    );
    assert_eq!(
        QualMetricsError::Usage(String::new()).exit_code(),
        crate::EXIT_FAILURE
    );
}

#[test]
fn invalid_pattern_keeps_source() {
    let source = regex::Regex::new("(").unwrap_err();
    let err = QualMetricsError::InvalidPattern {
        pattern: "(".to_string(),
        source,
    };
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(err.exit_code(), crate::EXIT_CONFIG_ERROR);
}
