use std::fmt::Write;

use crate::counter::{CommentKind, SimpleForm};
use crate::error::Result;

use super::{CommentsView, ComplexityView, ReportFormatter, SimilarityView};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

const NAME_WIDTH: usize = 40;
const RULE_WIDTH: usize = 50;

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn label(kind: CommentKind, marker: &str) -> String {
        match kind {
            CommentKind::ExcludedMarker => format!("EXCLUDED - {marker}"),
            CommentKind::Block => "BLOCK".to_string(),
            CommentKind::Doc => "DOC".to_string(),
            CommentKind::Simple(SimpleForm::Leading) => "SIMPLE".to_string(),
            CommentKind::Simple(SimpleForm::Inline) => "INLINE".to_string(),
        }
    }

    const fn kind_color(kind: CommentKind) -> &'static str {
        match kind {
            CommentKind::ExcludedMarker => ansi::YELLOW,
            CommentKind::Block => ansi::CYAN,
            CommentKind::Doc => ansi::GREEN,
            CommentKind::Simple(_) => ansi::MAGENTA,
        }
    }

    fn colorize_with_color(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format_comments(&self, view: &CommentsView<'_>) -> Result<String> {
        let mut output = String::new();
        let file_name = view
            .file
            .file_name()
            .map_or_else(|| view.file.display().to_string(), |n| n.to_string_lossy().to_string());

        writeln!(
            output,
            "Comments found in {file_name} (excluding /// {} markers):",
            view.marker
        )
        .ok();

        for occurrence in &view.classification.occurrences {
            let label = Self::label(occurrence.kind, view.marker);
            let label = self.colorize_with_color(&label, Self::kind_color(occurrence.kind));
            writeln!(
                output,
                "Line {:3} [{label}]: {}",
                occurrence.start_line,
                occurrence.text.joined()
            )
            .ok();
        }

        let report = &view.classification.report;
        let total = report.total_comments();
        writeln!(output).ok();
        writeln!(output, "Summary:").ok();
        writeln!(output, "  Total lines: {}", report.total_lines).ok();
        writeln!(output, "  Simple comments (//): {}", report.simple_count).ok();
        writeln!(output, "  Doc comments (///): {}", report.doc_count).ok();
        writeln!(output, "  Block comments (/* */): {}", report.block_count).ok();
        writeln!(output, "  Total comments: {total}").ok();
        writeln!(
            output,
            "  Comment ratio: {total}/{} = {:.2}%",
            report.total_lines,
            report.ratio_percent()
        )
        .ok();

        Ok(output)
    }

    fn format_complexity(&self, view: &ComplexityView<'_>) -> Result<String> {
        let mut output = String::new();
        let file = view.file.display();

        let Some(most_complex) = view.report.most_complex() else {
            writeln!(output, "No functions found in {file}").ok();
            return Ok(output);
        };

        let rule = "-".repeat(RULE_WIDTH);
        writeln!(output, "Cyclomatic Complexity analysis for {file}").ok();
        writeln!(output).ok();
        writeln!(output, "{:<NAME_WIDTH$} {:>4}", "Function", "CC").ok();
        writeln!(output, "{rule}").ok();

        for function in &view.report.functions {
            writeln!(
                output,
                "{:<NAME_WIDTH$} {:>4}",
                function.name(),
                function.complexity
            )
            .ok();
        }

        writeln!(output, "{rule}").ok();
        let name = self.colorize_with_color(most_complex.name(), ansi::RED);
        writeln!(
            output,
            "Most complex function: {name} (CC = {})",
            most_complex.complexity
        )
        .ok();
        writeln!(output, "Maximum complexity: {}", most_complex.complexity).ok();

        Ok(output)
    }

    fn format_similarity(&self, view: &SimilarityView<'_>) -> Result<String> {
        Ok(format!("Similarity: {:.3}\n", view.result.score))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
