//! Canonical URL assembly shared by every shape.

use url::{Position, Url};

use super::error::DetectError;
use super::shape::Classified;

/// Forced-getter prefix understood by the downstream fetcher.
pub const SCHEME_PREFIX: &str = "s3::";

/// Stands in for a dot segment while `url` parses the rest of the path.
const DOT_SEGMENT_MASK: &str = "_";

/// Segments the URL parser would resolve away, including percent-encoded dots.
fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}

/// Rebuilds `classified` as `s3::https://...`, normalised by `url::Url`.
///
/// Host and percent-encoding come from `url`. Path segments are kept as
/// written: `\` is escaped to `%5C` and `.`/`..` stay literal, so the bucket
/// and key always come out in the order they went in.
pub fn assemble(classified: &Classified<'_>) -> Result<String, DetectError> {
    let host = classified.host.render(classified.region);
    let path = match classified.bucket {
        Some(bucket) => format!("{bucket}/{}", classified.key),
        None => classified.key.clone(),
    }
    .replace('\\', "%5C");

    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let (segments, suffix) = path.split_at(end);
    let literal: Vec<&str> = segments.split('/').collect();
    let masked: Vec<&str> = literal
        .iter()
        .map(|s| if is_dot_segment(s) { DOT_SEGMENT_MASK } else { *s })
        .collect();

    let raw = format!("{host}/{}{suffix}", masked.join("/"));
    let parsed = Url::parse(&raw).map_err(|source| DetectError::UrlAssembly {
        url: raw.clone(),
        source,
    })?;

    if !literal.iter().any(|s| is_dot_segment(s)) {
        return Ok(format!("{SCHEME_PREFIX}{parsed}"));
    }

    let restored: Vec<&str> = parsed
        .path_segments()
        .into_iter()
        .flatten()
        .zip(&literal)
        .map(|(encoded, lit)| if is_dot_segment(lit) { *lit } else { encoded })
        .collect();

    Ok(format!(
        "{SCHEME_PREFIX}{}/{}{}",
        &parsed[..Position::BeforePath],
        restored.join("/"),
        &parsed[Position::AfterPath..]
    ))
}
