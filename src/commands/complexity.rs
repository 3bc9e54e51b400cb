use tracing::debug;

use crate::analyzer::{ComplexityAnalyzer, RustComplexityAnalyzer};
use crate::cli::{Cli, ComplexityArgs};
use crate::output::{ComplexityView, formatter_for};
use crate::{EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, config_for, report_error};
use super::input::{read_source, write_output};

#[must_use]
pub fn run_complexity(args: &ComplexityArgs, cli: &Cli) -> i32 {
    match run_complexity_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Score every function in one file and print the report.
///
/// # Errors
/// Returns an error if configuration is invalid, the file cannot be read,
/// or the report cannot be written.
pub fn run_complexity_impl(args: &ComplexityArgs, cli: &Cli) -> Result<()> {
    let config = config_for(cli)?;
    let source = read_source(&args.file, Some(&config.complexity.extension), cli.quiet)?;

    let report = RustComplexityAnalyzer::new().analyze(&source);
    debug!(
        functions = report.functions.len(),
        max = report.max_complexity(),
        "analyzed"
    );

    let view = ComplexityView {
        file: &args.file,
        report: &report,
    };
    let formatter = formatter_for(args.report.format, color_choice_to_mode(cli.color));
    let output = formatter.format_complexity(&view)?;

    write_output(args.report.output.as_deref(), &output)
}

#[cfg(test)]
#[path = "complexity_tests.rs"]
mod tests;
