//! Per-input detection outcomes, for batch runs and machine-readable output.

use serde::Serialize;
use std::io::{self, BufRead};

use crate::config::BatchConfig;
use crate::s3::{self, DetectError};

/// Result of running detection on one input, flattened for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectOutcome {
    pub input: String,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectOutcome {
    pub fn from_result(input: &str, result: Result<Option<String>, DetectError>) -> Self {
        let (url, error) = match result {
            Ok(url) => (url, None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            input: input.to_string(),
            matched: url.is_some(),
            url,
            error,
        }
    }

    /// Runs S3 detection on `input`.
    pub fn detect(input: &str, pwd: &str) -> Self {
        Self::from_result(input, s3::detect(input, pwd))
    }
}

/// Runs detection on every line of `reader`. Per-line errors are recorded, not returned.
pub fn detect_lines<R: BufRead>(reader: R, cfg: &BatchConfig) -> io::Result<Vec<DetectOutcome>> {
    let mut outcomes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let candidate = if cfg.trim_whitespace {
            line.trim()
        } else {
            line.as_str()
        };
        if cfg.skip_blank && candidate.is_empty() {
            continue;
        }
        let outcome = DetectOutcome::detect(candidate, "");
        if let Some(err) = &outcome.error {
            tracing::debug!(input = candidate, error = %err, "line rejected");
        }
        if cfg.skip_unmatched && !outcome.matched {
            continue;
        }
        outcomes.push(outcome);
    }
    tracing::debug!(count = outcomes.len(), "batch detection finished");
    Ok(outcomes)
}
