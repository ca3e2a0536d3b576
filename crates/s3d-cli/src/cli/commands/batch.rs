//! `s3d batch [path]` – detect every line of a file or stdin.

use anyhow::{Context, Result};
use s3d_core::config::BatchConfig;
use s3d_core::report::detect_lines;
use std::fs::File;
use std::io::{self, BufReader, Write};

use super::output::write_outcome;

pub fn run_batch<W: Write>(out: &mut W, path: &str, cfg: &BatchConfig, json: bool) -> Result<()> {
    let outcomes = if path == "-" {
        detect_lines(io::stdin().lock(), cfg).context("reading stdin")?
    } else {
        let file = File::open(path).with_context(|| format!("opening {path}"))?;
        detect_lines(BufReader::new(file), cfg).with_context(|| format!("reading {path}"))?
    };

    let matched = outcomes.iter().filter(|o| o.matched).count();
    tracing::info!(path, lines = outcomes.len(), matched, "batch complete");

    for outcome in &outcomes {
        write_outcome(out, outcome, json)?;
    }
    Ok(())
}
