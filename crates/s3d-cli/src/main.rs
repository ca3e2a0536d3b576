use clap::Parser;
use s3d_core::{config, logging};

mod cli;

use crate::cli::{Cli, CliCommand};

fn main() {
    // Parse first so --help and usage errors never depend on config.toml.
    let cli = Cli::parse();

    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    let filter = config::configured_log_filter();
    if let Err(err) = logging::init_logging(filter.as_deref()) {
        logging::init_logging_stderr(filter.as_deref());
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = CliCommand::run_from_args(cli) {
        eprintln!("s3d error: {:#}", err);
        std::process::exit(1);
    }
}
