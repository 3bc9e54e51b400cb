mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use std::path::Path;

use crate::analyzer::ComplexityReport;
use crate::counter::Classification;
use crate::error::Result;
use crate::similarity::SimilarityScore;

/// Comment classification of one file, ready for formatting.
#[derive(Debug, Clone, Copy)]
pub struct CommentsView<'a> {
    pub file: &'a Path,
    /// Marker word excluded from the counts, shown in labels
    pub marker: &'a str,
    pub classification: &'a Classification,
}

#[derive(Debug, Clone, Copy)]
pub struct ComplexityView<'a> {
    pub file: &'a Path,
    pub report: &'a ComplexityReport,
}

#[derive(Debug, Clone, Copy)]
pub struct SimilarityView<'a> {
    pub reference: &'a Path,
    pub candidate: &'a Path,
    pub result: SimilarityScore,
}

/// Trait for rendering command results into an output format.
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_comments(&self, view: &CommentsView<'_>) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_complexity(&self, view: &ComplexityView<'_>) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_similarity(&self, view: &SimilarityView<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Pick the formatter for `format`.
#[must_use]
pub fn formatter_for(format: OutputFormat, color: ColorMode) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
