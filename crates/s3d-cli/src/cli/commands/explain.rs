//! `s3d explain <candidate>` – show how a candidate is classified.

use anyhow::{Context, Result};
use s3d_core::s3::{self, DOMAIN_MARKER};
use std::io::Write;

pub fn run_explain<W: Write>(out: &mut W, candidate: &str) -> Result<()> {
    if candidate.is_empty() || !candidate.contains(DOMAIN_MARKER) {
        writeln!(out, "not an S3 URL (no \"{DOMAIN_MARKER}\" in input)")?;
        return Ok(());
    }

    let classified =
        s3::classify(candidate).with_context(|| format!("classifying {candidate}"))?;
    let url = s3::assemble(&classified).with_context(|| format!("assembling {candidate}"))?;

    writeln!(out, "shape:  {}", classified.shape)?;
    writeln!(out, "bucket: {}", classified.bucket.unwrap_or("(first path segment)"))?;
    writeln!(out, "region: {}", classified.region)?;
    writeln!(out, "key:    {}", classified.key)?;
    writeln!(out, "url:    {url}")?;
    Ok(())
}
