use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{QualMetricsError, Result};

/// Whether `path` ends in `.expected` (case-insensitive, leading dot optional).
#[must_use]
pub fn has_extension(path: &Path, expected: &str) -> bool {
    let expected = expected.trim_start_matches('.');
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected))
}

/// Read an input file as text.
///
/// A file with an unexpected extension is still read; an advisory is
/// printed to stderr unless `quiet` is set. Invalid UTF-8 is replaced
/// rather than rejected.
///
/// # Errors
/// Returns [`QualMetricsError::NotFound`] if `path` does not exist, or
/// [`QualMetricsError::FileRead`] if it cannot be read.
pub fn read_source(path: &Path, expected_extension: Option<&str>, quiet: bool) -> Result<String> {
    if !path.exists() {
        return Err(QualMetricsError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if let Some(ext) = expected_extension
        && !has_extension(path, ext)
    {
        if quiet {
            debug!(path = %path.display(), "unexpected extension");
        } else {
            eprintln!(
                "Warning: '{}' does not look like a source file (expected .{})",
                path.display(),
                ext.trim_start_matches('.')
            );
        }
    }

    let bytes = fs::read(path).map_err(|source| QualMetricsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a report to `output_path`, or to stdout when no path is given.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        debug!(path = %path.display(), "report written");
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
