use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_MARKER;
use crate::error::{QualMetricsError, Result};
use crate::similarity::{DEFAULT_MAX_NGRAM, MAX_SUPPORTED_NGRAM};

/// Source extension expected by every command.
pub const DEFAULT_EXTENSION: &str = "rs";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub comments: CommentsConfig,

    #[serde(default)]
    pub complexity: ComplexityConfig,

    #[serde(default)]
    pub similarity: SimilarityConfig,
}

/// Settings for the `comments` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CommentsConfig {
    /// Word that, after `///`, excludes a line from the counts.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Expected file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ComplexityConfig {
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SimilarityConfig {
    /// Highest n-gram order used by BLEU.
    #[serde(default = "default_max_ngram")]
    pub max_ngram: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_ngram: default_max_ngram(),
        }
    }
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

const fn default_max_ngram() -> usize {
    DEFAULT_MAX_NGRAM
}

impl Config {
    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns [`QualMetricsError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        let marker = &self.comments.marker;
        if marker.is_empty() || marker.chars().any(char::is_whitespace) {
            return Err(QualMetricsError::Config(format!(
                "comments.marker must be a single non-empty word, got '{marker}'"
            )));
        }

        for (key, ext) in [
            ("comments.extension", &self.comments.extension),
            ("complexity.extension", &self.complexity.extension),
        ] {
            if ext.trim_start_matches('.').is_empty() {
                return Err(QualMetricsError::Config(format!("{key} must not be empty")));
            }
        }

        let order = self.similarity.max_ngram;
        if !(1..=MAX_SUPPORTED_NGRAM).contains(&order) {
            return Err(QualMetricsError::Config(format!(
                "similarity.max_ngram must be between 1 and {MAX_SUPPORTED_NGRAM}, got {order}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
