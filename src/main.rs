use clap::Parser;

use qualmetrics::QualMetricsError;
use qualmetrics::cli::{Cli, Commands, is_informational};
use qualmetrics::commands::{run_comments, run_complexity, run_init, run_similarity};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => {
            let err = QualMetricsError::from(e);
            eprint!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    qualmetrics::logging::init(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Comments(args) => run_comments(args, &cli),
        Commands::Complexity(args) => run_complexity(args, &cli),
        Commands::Similarity(args) => run_similarity(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
