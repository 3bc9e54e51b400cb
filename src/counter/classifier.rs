use regex::Regex;
use tracing::{debug, trace};

use crate::error::{QualMetricsError, Result};

use super::types::{
    Classification, CommentKind, CommentOccurrence, CommentText, SimpleForm,
};

/// Word that, placed after `///`, turns a line into an excluded marker.
pub const DEFAULT_MARKER: &str = "CHECK";

const DOC_SIGIL: &str = "///";
const LINE_SIGIL: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// What a single line looks like before any span handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineMatch {
    Marker,
    BlockOpen,
    Doc,
    Simple(SimpleForm),
    /// `//` found, but the quote-parity check places it inside a string
    InString,
    Code,
}

/// Line-oriented comment scanner for Rust sources.
///
/// Classification is a single forward pass. A line is tested, in order, for
/// the excluded marker, a block opener, a doc comment and finally a plain
/// `//` comment; the first match wins.
#[derive(Debug, Clone)]
pub struct CommentClassifier {
    marker: Regex,
    marker_word: String,
}

impl Default for CommentClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER).expect("Invalid regex")
    }
}

impl CommentClassifier {
    /// Build a classifier whose excluded marker is `///` followed by
    /// optional whitespace and `marker_word` (case-insensitive).
    ///
    /// # Errors
    /// Returns [`QualMetricsError::InvalidPattern`] if the marker regex
    /// cannot be compiled.
    pub fn new(marker_word: &str) -> Result<Self> {
        let pattern = format!(r"(?i){DOC_SIGIL}\s*{}", regex::escape(marker_word));
        let marker = Regex::new(&pattern)
            .map_err(|source| QualMetricsError::InvalidPattern { pattern, source })?;

        Ok(Self {
            marker,
            marker_word: marker_word.to_string(),
        })
    }

    #[must_use]
    pub fn marker_word(&self) -> &str {
        &self.marker_word
    }

    /// The marker may appear anywhere on the line, not only at its start.
    #[must_use]
    pub fn is_excluded_marker(&self, line: &str) -> bool {
        self.marker.is_match(line)
    }

    /// Classify a whole source text, splitting it on line endings.
    #[must_use]
    pub fn classify_source(&self, source: &str) -> Classification {
        let lines: Vec<&str> = source.lines().collect();
        self.classify(&lines)
    }

    #[must_use]
    pub fn classify<S: AsRef<str>>(&self, lines: &[S]) -> Classification {
        let mut result = Classification::with_total_lines(lines.len());
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i].as_ref().trim_end();
            let line_no = i + 1;

            match self.match_line(line) {
                LineMatch::Marker => {
                    trace!(line = line_no, "excluded marker");
                    result.push(single(line_no, CommentKind::ExcludedMarker, line));
                }
                LineMatch::BlockOpen => {
                    let Some(close) = find_block_close(lines, i) else {
                        debug!(line = line_no, "unterminated block comment, ignoring rest of file");
                        break;
                    };
                    let span: Vec<String> = lines[i..=close]
                        .iter()
                        .map(|l| l.as_ref().trim_end().to_string())
                        .collect();
                    trace!(start = line_no, end = close + 1, "block comment");
                    result.push(CommentOccurrence::new(
                        line_no,
                        CommentKind::Block,
                        CommentText::Block(span),
                    ));
                    i = close + 1;
                    continue;
                }
                LineMatch::Doc => result.push(single(line_no, CommentKind::Doc, line)),
                LineMatch::Simple(form) => {
                    result.push(single(line_no, CommentKind::Simple(form), line));
                }
                LineMatch::InString => {
                    trace!(line = line_no, "comment sigil inside string literal");
                }
                LineMatch::Code => {}
            }

            i += 1;
        }

        result
    }

    fn match_line(&self, line: &str) -> LineMatch {
        if self.is_excluded_marker(line) {
            return LineMatch::Marker;
        }
        if line.contains(BLOCK_OPEN) {
            return LineMatch::BlockOpen;
        }

        let trimmed = line.trim();
        if trimmed.starts_with(DOC_SIGIL) {
            return LineMatch::Doc;
        }
        if !line.contains(LINE_SIGIL) {
            return LineMatch::Code;
        }
        if is_inside_string(line) {
            return LineMatch::InString;
        }

        if trimmed.starts_with(LINE_SIGIL) {
            LineMatch::Simple(SimpleForm::Leading)
        } else {
            LineMatch::Simple(SimpleForm::Inline)
        }
    }
}

fn single(line_no: usize, kind: CommentKind, line: &str) -> CommentOccurrence {
    CommentOccurrence::new(line_no, kind, CommentText::Line(line.to_string()))
}

/// Index of the first line, from `start` on, that contains `*/`.
///
/// The opening line itself is included, so `/* x */` closes immediately.
fn find_block_close<S: AsRef<str>>(lines: &[S], start: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, line)| line.as_ref().contains(BLOCK_CLOSE))
        .map(|(i, _)| i)
}

/// Quote-parity check for the first `//` on a line.
///
/// Counts `"` before the sigil; an odd count means the sigil sits inside an
/// open string literal. This is an approximation: escaped quotes, char
/// literals such as `'"'` and strings spanning lines are not understood.
#[must_use]
pub fn is_inside_string(line: &str) -> bool {
    let before = line.find(LINE_SIGIL).map_or(line, |pos| &line[..pos]);
    before.matches('"').count() % 2 == 1
}

#[cfg(test)]
#[path = "classifier_tests/mod.rs"]
mod tests;
