use tracing::debug;

use crate::cli::{Cli, SimilarityArgs};
use crate::output::{SimilarityView, formatter_for};
use crate::similarity::{SentenceBleu, SimilarityScore};
use crate::{EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, config_for, report_error};
use super::input::{read_source, write_output};

#[must_use]
pub fn run_similarity(args: &SimilarityArgs, cli: &Cli) -> i32 {
    match run_similarity_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Score the candidate file against the reference file.
///
/// # Errors
/// Returns an error if configuration is invalid, either file cannot be
/// read, or the report cannot be written.
pub fn run_similarity_impl(args: &SimilarityArgs, cli: &Cli) -> Result<()> {
    let config = config_for(cli)?;
    let reference = read_source(&args.reference, None, cli.quiet)?;
    let candidate = read_source(&args.candidate, None, cli.quiet)?;

    let metric = SentenceBleu::new(config.similarity.max_ngram);
    let result = SimilarityScore::compute(&metric, &reference, &candidate);
    debug!(
        max_ngram = metric.max_ngram(),
        reference_tokens = result.reference_tokens,
        candidate_tokens = result.candidate_tokens,
        score = result.score,
        "scored"
    );

    let view = SimilarityView {
        reference: &args.reference,
        candidate: &args.candidate,
        result,
    };
    let formatter = formatter_for(args.report.format, color_choice_to_mode(cli.color));
    let output = formatter.format_similarity(&view)?;

    write_output(args.report.output.as_deref(), &output)
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
