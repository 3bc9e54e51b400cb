use serde::Serialize;

use crate::analyzer::FunctionComplexity;
use crate::counter::{CommentKind, CommentOccurrence, SimpleForm};
use crate::error::Result;

use super::{CommentsView, ComplexityView, ReportFormatter, SimilarityView};

pub struct JsonFormatter;

#[derive(Serialize)]
struct CommentsOutput<'a> {
    file: String,
    marker: &'a str,
    summary: CommentSummary,
    comments: Vec<CommentEntry>,
}

#[derive(Serialize)]
struct CommentSummary {
    total_lines: usize,
    simple: usize,
    doc: usize,
    block: usize,
    total_comments: usize,
    ratio_percent: f64,
}

#[derive(Serialize)]
struct CommentEntry {
    line: usize,
    end_line: usize,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    form: Option<SimpleForm>,
    text: String,
}

#[derive(Serialize)]
struct ComplexityOutput<'a> {
    file: String,
    functions: &'a [FunctionComplexity],
    most_complex: Option<MostComplex<'a>>,
}

#[derive(Serialize)]
struct MostComplex<'a> {
    name: &'a str,
    complexity: u32,
}

#[derive(Serialize)]
struct SimilarityOutput {
    reference: String,
    candidate: String,
    reference_tokens: usize,
    candidate_tokens: usize,
    score: f64,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn convert_occurrence(occurrence: &CommentOccurrence) -> CommentEntry {
    let form = match occurrence.kind {
        CommentKind::Simple(form) => Some(form),
        _ => None,
    };

    CommentEntry {
        line: occurrence.start_line,
        end_line: occurrence.end_line(),
        kind: occurrence.kind.as_str(),
        form,
        text: occurrence.text.joined(),
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_comments(&self, view: &CommentsView<'_>) -> Result<String> {
        let report = &view.classification.report;
        let output = CommentsOutput {
            file: view.file.display().to_string(),
            marker: view.marker,
            summary: CommentSummary {
                total_lines: report.total_lines,
                simple: report.simple_count,
                doc: report.doc_count,
                block: report.block_count,
                total_comments: report.total_comments(),
                ratio_percent: report.ratio_percent(),
            },
            comments: view
                .classification
                .occurrences
                .iter()
                .map(convert_occurrence)
                .collect(),
        };

        to_json(&output)
    }

    fn format_complexity(&self, view: &ComplexityView<'_>) -> Result<String> {
        let output = ComplexityOutput {
            file: view.file.display().to_string(),
            functions: &view.report.functions,
            most_complex: view.report.most_complex().map(|f| MostComplex {
                name: f.name(),
                complexity: f.complexity,
            }),
        };

        to_json(&output)
    }

    fn format_similarity(&self, view: &SimilarityView<'_>) -> Result<String> {
        let output = SimilarityOutput {
            reference: view.reference.display().to_string(),
            candidate: view.candidate.display().to_string(),
            reference_tokens: view.result.reference_tokens,
            candidate_tokens: view.result.candidate_tokens,
            score: view.result.score,
        };

        to_json(&output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
