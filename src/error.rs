use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualMetricsError {
    #[error("{0}")]
    Usage(String),

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid marker pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl QualMetricsError {
    /// Short category name, used in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Usage(_) => "Usage",
            Self::NotFound { .. } => "NotFound",
            Self::FileRead { .. } => "FileRead",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Process exit code for this error.
    ///
    /// Configuration problems exit with [`crate::EXIT_CONFIG_ERROR`],
    /// everything else with [`crate::EXIT_FAILURE`].
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::InvalidPattern { .. } => {
                crate::EXIT_CONFIG_ERROR
            }
            _ => crate::EXIT_FAILURE,
        }
    }
}

impl From<clap::Error> for QualMetricsError {
    fn from(err: clap::Error) -> Self {
        Self::Usage(err.render().to_string())
    }
}

pub type Result<T> = std::result::Result<T, QualMetricsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
