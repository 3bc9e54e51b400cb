use tracing::debug;

use crate::cli::{Cli, CommentsArgs};
use crate::counter::CommentClassifier;
use crate::output::{CommentsView, formatter_for};
use crate::{EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, config_for, report_error};
use super::input::{read_source, write_output};

#[must_use]
pub fn run_comments(args: &CommentsArgs, cli: &Cli) -> i32 {
    match run_comments_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Classify the comments of one file and print the report.
///
/// # Errors
/// Returns an error if configuration is invalid, the file cannot be read,
/// or the report cannot be written.
pub fn run_comments_impl(args: &CommentsArgs, cli: &Cli) -> Result<()> {
    let config = config_for(cli)?;
    let classifier = CommentClassifier::new(&config.comments.marker)?;
    let source = read_source(&args.file, Some(&config.comments.extension), cli.quiet)?;

    let classification = classifier.classify_source(&source);
    debug!(
        lines = classification.report.total_lines,
        comments = classification.report.total_comments(),
        "classified"
    );

    let view = CommentsView {
        file: &args.file,
        marker: classifier.marker_word(),
        classification: &classification,
    };
    let formatter = formatter_for(args.report.format, color_choice_to_mode(cli.color));
    let output = formatter.format_comments(&view)?;

    write_output(args.report.output.as_deref(), &output)
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
