//! CLI for the s3d URL detector.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use s3d_core::config::{self, OutputFormat, S3dConfig};
use std::io::{self, Write};

use commands::{run_batch, run_completions, run_detect, run_explain, run_man};

/// Top-level CLI for s3d.
#[derive(Debug, Parser)]
#[command(name = "s3d")]
#[command(about = "s3d: rewrite Amazon S3 object URLs into canonical s3:: getter URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Detect one or more candidates and print their canonical URLs.
    Detect {
        /// Location strings, e.g. "my-bucket.s3.us-west-2.amazonaws.com/key".
        #[arg(required = true)]
        candidates: Vec<String>,
        /// Working directory hint passed to the detector (unused by S3).
        #[arg(long, default_value = "")]
        pwd: String,
        /// Print one JSON object per candidate.
        #[arg(long)]
        json: bool,
    },

    /// Show which S3 shape a candidate matches and the fields taken from it.
    Explain {
        /// Location string to classify.
        candidate: String,
    },

    /// Detect every line of a file ("-" for stdin).
    Batch {
        /// Input file, one candidate per line.
        #[arg(default_value = "-")]
        path: String,
        /// Print one JSON object per line.
        #[arg(long)]
        json: bool,
        /// Only print lines that matched.
        #[arg(long)]
        only_matched: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the roff man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args(cli: Cli) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli.command.run(&cfg, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn run<W: Write>(self, cfg: &S3dConfig, out: &mut W) -> Result<()> {
        let default_json = cfg.output == OutputFormat::Json;
        match self {
            CliCommand::Detect {
                candidates,
                pwd,
                json,
            } => run_detect(out, &candidates, &pwd, json || default_json),
            CliCommand::Explain { candidate } => run_explain(out, &candidate),
            CliCommand::Batch {
                path,
                json,
                only_matched,
            } => {
                let mut batch = cfg.batch_or_default();
                batch.skip_unmatched |= only_matched;
                run_batch(out, &path, &batch, json || default_json)
            }
            CliCommand::Completions { shell } => run_completions(out, shell),
            CliCommand::Man => run_man(out),
        }
    }
}

#[cfg(test)]
mod tests;
