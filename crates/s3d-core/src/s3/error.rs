//! Error type for S3 URL detection.

use thiserror::Error;

/// Why a candidate carrying the `.amazonaws.com/` marker could not be rewritten.
///
/// Both kinds are terminal: detection is deterministic, so retrying the same
/// input yields the same error. Callers in a detector chain should treat either
/// one as "not an S3 location" and move on.
#[derive(Debug, Error)]
pub enum DetectError {
    /// Host or path layout does not match any known S3 shape.
    #[error("URL is not a valid S3 URL: {input}")]
    InvalidShape { input: String },

    /// The reassembled `https://` URL failed to parse.
    #[error("error parsing S3 URL {url}: {source}")]
    UrlAssembly {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl DetectError {
    pub(crate) fn invalid_shape(input: &str) -> Self {
        DetectError::InvalidShape {
            input: input.to_string(),
        }
    }

    /// True when the input simply did not look like any S3 shape.
    pub fn is_invalid_shape(&self) -> bool {
        matches!(self, DetectError::InvalidShape { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_shape_display() {
        let err = DetectError::invalid_shape("a.b/c.amazonaws.com/");
        assert_eq!(
            err.to_string(),
            "URL is not a valid S3 URL: a.b/c.amazonaws.com/"
        );
        assert!(err.is_invalid_shape());
    }

    #[test]
    fn url_assembly_keeps_source() {
        let source = url::Url::parse("https://bad host/").unwrap_err();
        let err = DetectError::UrlAssembly {
            url: "https://bad host/".to_string(),
            source,
        };
        assert!(!err.is_invalid_shape());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("error parsing S3 URL https://bad host/: "));
    }
}
