//! Shared printing for detection outcomes.

use anyhow::Result;
use s3d_core::report::DetectOutcome;
use std::io::Write;

/// Plain mode prints the URL, or `-` for anything that did not match.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &DetectOutcome, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, outcome)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", outcome.url.as_deref().unwrap_or("-"))?;
    }
    Ok(())
}
