use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::QualMetricsError;

use super::mock_fs::MockFileSystem;

fn load(content: &str) -> crate::Result<super::LoadResult> {
    let fs = MockFileSystem::new().with_file("/cfg.toml", content);
    FileConfigLoader::with_fs(fs).load_from_path(Path::new("/cfg.toml"))
}

#[test]
fn explicit_path_is_parsed() {
    let result = load("[comments]\nmarker = \"SAFETY\"\nextension = \"rsx\"\n").unwrap();

    assert_eq!(result.config.comments.marker, "SAFETY");
    assert_eq!(result.config.comments.extension, "rsx");
}

#[test]
fn syntax_error_names_the_file() {
    let err = load("[comments\nmarker = 1").unwrap_err();

    assert!(matches!(err, QualMetricsError::Config(_)));
    assert!(err.to_string().contains("/cfg.toml"));
}

#[test]
fn invalid_values_fail_validation() {
    let err = load("[similarity]\nmax_ngram = 0\n").unwrap_err();

    assert!(err.to_string().contains("max_ngram"));
    assert_eq!(err.exit_code(), crate::EXIT_CONFIG_ERROR);
}

#[test]
fn wrong_value_type_is_rejected() {
    let err = load("[similarity]\nmax_ngram = \"four\"\n").unwrap_err();
    assert!(matches!(err, QualMetricsError::Config(_)));
}
