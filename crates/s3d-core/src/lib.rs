pub mod config;
pub mod detector;
pub mod logging;
pub mod report;
pub mod s3;

pub use detector::Detector;
pub use s3::{detect, DetectError, S3Detector};
