use std::path::Path;

use tracing::debug;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::QualMetricsError;
use crate::output::ColorMode;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    if let Some(source) = &result.source {
        debug!(path = %source.display(), "using configuration");
    }
    Ok(result)
}

/// Load the effective configuration for a command invocation.
///
/// # Errors
/// See [`load_config`].
pub(crate) fn config_for(cli: &Cli) -> crate::Result<Config> {
    load_config(cli.config.as_deref(), cli.no_config).map(|result| result.config)
}

/// Print `err` to stderr and return its exit code.
pub(crate) fn report_error(err: &QualMetricsError) -> i32 {
    debug!(kind = err.error_type(), "command failed");
    eprintln!("Error: {err}");
    if let Some(source) = std::error::Error::source(err) {
        eprintln!("  Caused by: {source}");
    }
    err.exit_code()
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
