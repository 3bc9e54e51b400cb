//! Comment classifier test suite.
//!
//! Tests are organized into submodules by category:
//! - `detection_tests`: Doc, leading and inline comment detection, ordering
//! - `marker_tests`: `/// CHECK` exclusion and custom marker words
//! - `block_tests`: Block spans, unterminated blocks, priority over other kinds
//! - `string_context_tests`: Quote-parity handling of `//` inside string literals
//! - `report_tests`: Totals and ratio invariants

use super::*;


fn classify(source: &str) -> Classification {
    CommentClassifier::default().classify_source(source)
}

fn kinds(result: &Classification) -> Vec<CommentKind> {
    result.occurrences.iter().map(|o| o.kind).collect()
}
