//! Detector interface for turning loosely written source strings into
//! forced-getter URLs.
//!
//! A caller may hold several detectors and try them in priority order,
//! stopping at the first one that returns a URL.

use crate::s3::DetectError;

/// Trait implemented by URL shape detectors (e.g. [`crate::s3::S3Detector`]).
pub trait Detector {
    /// Short name, also the forced-getter scheme the detector produces.
    fn name(&self) -> &'static str;

    /// `Ok(None)` means "not mine"; the caller should try the next detector.
    fn detect(&self, src: &str, pwd: &str) -> Result<Option<String>, DetectError>;
}
