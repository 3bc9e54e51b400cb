use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "qualmetrics")]
#[command(author, version, about = "Comment density, complexity and similarity metrics for Rust files")]
#[command(long_about = "Code-quality measurements for Rust source files.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Usage error, missing or unreadable input\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress advisory warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count comments and report the comment-to-line ratio
    Comments(CommentsArgs),

    /// Report per-function cyclomatic complexity
    Complexity(ComplexityArgs),

    /// Score n-gram similarity between two files
    Similarity(SimilarityArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

/// Options shared by the reporting commands.
#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CommentsArgs {
    /// Source file to scan
    pub file: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Parser, Debug)]
pub struct ComplexityArgs {
    /// Source file to analyze
    pub file: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Parser, Debug)]
pub struct SimilarityArgs {
    /// Reference file
    pub reference: PathBuf,

    /// Candidate file compared against the reference
    pub candidate: PathBuf,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".qualmetrics.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

/// Whether a parse error is really a help or version request.
#[must_use]
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
    )
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
