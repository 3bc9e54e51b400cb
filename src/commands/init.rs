use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_SUCCESS, QualMetricsError, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Writes a configuration file holding the default settings.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(QualMetricsError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# qualmetrics configuration file

[comments]
# Lines containing "/// <marker>" are listed but not counted (default: "CHECK")
marker = "CHECK"

# Expected source extension; other files trigger a warning (default: "rs")
extension = "rs"

[complexity]
extension = "rs"

[similarity]
# Highest n-gram order used by the BLEU score, 1 to 8 (default: 4)
max_ngram = 4
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
