//! S3 URL detection.
//!
//! Recognises the path-style, virtual-host-style, regional virtual-host-style
//! and VPC endpoint forms of `*.amazonaws.com` object URLs and rewrites them
//! into the forced-getter form `s3::https://<host>/<bucket>/<key>`.
//!
//! Detection is pure: no I/O and no shared state, so it is safe to call from
//! any number of threads at once.

mod assemble;
mod error;
mod shape;

pub use assemble::{assemble, SCHEME_PREFIX};
pub use error::DetectError;
pub use shape::{classify, Classified, HostTemplate, Shape, ShapeDescriptor, SHAPES};

use crate::detector::Detector;

/// Substring that must be present before any classification is attempted.
pub const DOMAIN_MARKER: &str = ".amazonaws.com/";

/// Rewrites an S3 object URL into its canonical `s3::` form.
///
/// Returns `Ok(None)` when `candidate` is empty or lacks [`DOMAIN_MARKER`],
/// `Ok(Some(url))` on a match, and `Err` when the marker is present but the
/// host or path does not fit a known shape. `_pwd` is accepted for parity with
/// other detectors and ignored.
///
/// # Examples
///
/// - `"my-bucket.us-east-1.amazonaws.com/path/file.txt"` →
///   `"s3::https://us-east-1.amazonaws.com/my-bucket/path/file.txt"`
/// - `"random-text-no-marker"` → `None`
pub fn detect(candidate: &str, _pwd: &str) -> Result<Option<String>, DetectError> {
    if candidate.is_empty() || !candidate.contains(DOMAIN_MARKER) {
        return Ok(None);
    }

    let classified = classify(candidate)?;
    let url = assemble(&classified)?;
    tracing::debug!(shape = %classified.shape, %url, "detected S3 URL");
    Ok(Some(url))
}

/// [`Detector`] for Amazon S3 object URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct S3Detector;

impl Detector for S3Detector {
    fn name(&self) -> &'static str {
        "s3"
    }

    fn detect(&self, src: &str, pwd: &str) -> Result<Option<String>, DetectError> {
        detect(src, pwd)
    }
}
