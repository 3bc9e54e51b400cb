use tracing::{debug, trace};

use super::parser::{RustParser, mask_non_code};
use super::types::{ComplexityReport, FunctionComplexity};

/// Keywords that open a branch.
const DECISION_KEYWORDS: &[&str] = &["if", "for", "while", "match"];

/// Short-circuit operators, each adds a path.
const DECISION_OPERATORS: &[&str] = &["&&", "||"];

/// Source of per-function cyclomatic complexity scores.
pub trait ComplexityAnalyzer {
    /// Score every function found in `content`, in source order.
    fn analyze(&self, content: &str) -> ComplexityReport;
}

/// Decision-point counter for Rust sources.
///
/// A function scores `1 +` the number of branching keywords and
/// short-circuit operators in its line span. Comments and literal contents
/// are masked first. Nested functions also count toward their parent.
#[derive(Default)]
pub struct RustComplexityAnalyzer {
    parser: RustParser,
}

impl RustComplexityAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComplexityAnalyzer for RustComplexityAnalyzer {
    fn analyze(&self, content: &str) -> ComplexityReport {
        let masked = mask_non_code(content);
        let functions = self.parser.parse_masked(&masked);
        debug!(count = functions.len(), "functions detected");

        let scored = functions
            .into_iter()
            .map(|function| {
                let body = &masked[function.start_line - 1..function.end_line];
                let complexity = 1 + body.iter().map(|line| count_decision_points(line)).sum::<u32>();
                trace!(name = %function.name, complexity, "scored function");
                FunctionComplexity::new(function, complexity)
            })
            .collect();

        ComplexityReport::new(scored)
    }
}

/// Count branching keywords (whole words) and short-circuit operators on a
/// masked line.
#[must_use]
pub fn count_decision_points(line: &str) -> u32 {
    let keywords = line
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| DECISION_KEYWORDS.contains(word))
        .count();
    let operators: usize = DECISION_OPERATORS
        .iter()
        .map(|op| line.matches(op).count())
        .sum();

    u32::try_from(keywords + operators).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "complexity_tests.rs"]
mod tests;
