//! `s3d detect <candidate>...` – print canonical URLs.

use anyhow::{bail, Result};
use s3d_core::report::DetectOutcome;
use std::io::Write;

use super::output::write_outcome;

pub fn run_detect<W: Write>(out: &mut W, candidates: &[String], pwd: &str, json: bool) -> Result<()> {
    let outcomes: Vec<DetectOutcome> = candidates
        .iter()
        .map(|c| DetectOutcome::detect(c, pwd))
        .collect();

    for outcome in &outcomes {
        write_outcome(out, outcome, json)?;
    }

    let mut failed = outcomes.iter().filter_map(|o| o.error.as_deref());
    if let Some(first) = failed.next() {
        let count = 1 + failed.count();
        bail!("{count} of {} candidate(s) malformed: {first}", outcomes.len());
    }
    Ok(())
}
