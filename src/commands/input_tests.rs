use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;

#[test]
fn has_extension_matches_case_insensitively() {
    assert!(has_extension(Path::new("src/lib.rs"), "rs"));
    assert!(has_extension(Path::new("MAIN.RS"), "rs"));
    assert!(has_extension(Path::new("main.rs"), ".rs"));
}

#[test]
fn has_extension_rejects_other_or_missing() {
    assert!(!has_extension(Path::new("notes.txt"), "rs"));
    assert!(!has_extension(Path::new("Makefile"), "rs"));
    assert!(!has_extension(Path::new("archive.rs.bak"), "rs"));
}

#[test]
fn read_source_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.rs");

    let err = read_source(&path, Some("rs"), false).unwrap_err();

    assert!(matches!(err, QualMetricsError::NotFound { .. }));
    assert!(err.to_string().contains("absent.rs"));
}

#[test]
fn read_source_wrong_extension_still_reads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("code.txt");
    fs::write(&path, "// note\n").unwrap();

    let content = read_source(&path, Some("rs"), true).unwrap();

    assert_eq!(content, "// note\n");
}

#[test]
fn read_source_replaces_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("binary.rs");
    fs::write(&path, [b'/', b'/', b' ', 0xFF, b'\n']).unwrap();

    let content = read_source(&path, None, false).unwrap();

    assert!(content.starts_with("// "));
    assert!(content.contains('\u{FFFD}'));
}

#[test]
fn read_source_directory_is_read_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = read_source(temp_dir.path(), None, true).unwrap_err();

    assert!(matches!(err, QualMetricsError::FileRead { .. }));
}

#[test]
fn write_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");

    write_output(Some(&path), "Similarity: 1.000\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Similarity: 1.000\n");
}
