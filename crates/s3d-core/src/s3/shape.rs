//! S3 hostname shapes and the ordered table used to classify them.

use std::fmt;

use super::error::DetectError;

/// Known S3 addressing shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `<region>.amazonaws.com/<bucket>/<key>`; bucket lives in the path.
    PathStyle,
    /// `<bucket>.<region>.amazonaws.com/<key>`.
    VhostStyle,
    /// `<bucket>.s3.<region>.amazonaws.com/<key>`.
    NewVhostStyle,
    /// `<bucket>.<vpce-id>.<...>.<region>.amazonaws.com/<key>`.
    VpceStyle,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::PathStyle => "path-style",
            Shape::VhostStyle => "vhost-style",
            Shape::NewVhostStyle => "new-vhost-style",
            Shape::VpceStyle => "vpce-style",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host the canonical URL is rebuilt on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostTemplate {
    /// `https://<region>.amazonaws.com`
    Regional,
    /// `https://s3.<region>.amazonaws.com`
    S3Regional,
}

impl HostTemplate {
    pub fn render(self, region: &str) -> String {
        match self {
            HostTemplate::Regional => format!("https://{region}.amazonaws.com"),
            HostTemplate::S3Regional => format!("https://s3.{region}.amazonaws.com"),
        }
    }
}

/// One row of the classification table.
#[derive(Clone, Copy)]
pub struct ShapeDescriptor {
    pub shape: Shape,
    /// Predicate over the dot-separated host labels.
    pub matches: fn(&[&str]) -> bool,
    /// Label holding the bucket; `None` when the bucket is already in the path.
    pub bucket: Option<usize>,
    /// Label holding the region.
    pub region: usize,
    pub host: HostTemplate,
}

fn is_path_style(labels: &[&str]) -> bool {
    labels.len() == 3
}

fn is_vhost_style(labels: &[&str]) -> bool {
    labels.len() == 4
}

fn is_new_vhost_style(labels: &[&str]) -> bool {
    labels.len() == 5 && labels[1] == "s3"
}

fn is_vpce_style(labels: &[&str]) -> bool {
    labels.len() > 5 && labels[1].contains("vpce")
}

/// Shapes in priority order. First match wins.
///
/// The VPC endpoint offsets (bucket at 0, region at 3) assume hostnames of the
/// form `<bucket>.<vpce-id>.<...>.<region>.amazonaws.com`.
pub const SHAPES: &[ShapeDescriptor] = &[
    ShapeDescriptor {
        shape: Shape::PathStyle,
        matches: is_path_style,
        bucket: None,
        region: 0,
        host: HostTemplate::Regional,
    },
    ShapeDescriptor {
        shape: Shape::VhostStyle,
        matches: is_vhost_style,
        bucket: Some(0),
        region: 1,
        host: HostTemplate::Regional,
    },
    ShapeDescriptor {
        shape: Shape::NewVhostStyle,
        matches: is_new_vhost_style,
        bucket: Some(0),
        region: 2,
        host: HostTemplate::S3Regional,
    },
    ShapeDescriptor {
        shape: Shape::VpceStyle,
        matches: is_vpce_style,
        bucket: Some(0),
        region: 3,
        host: HostTemplate::S3Regional,
    },
];

/// A candidate split into the fields its shape dictates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    pub shape: Shape,
    pub host: HostTemplate,
    pub bucket: Option<&'a str>,
    pub region: &'a str,
    /// Path segments after the host, rejoined with `/`.
    pub key: String,
}

/// Splits `candidate` into host labels and path, and matches it against [`SHAPES`].
///
/// Does not check for the `.amazonaws.com/` marker; [`super::detect`] does that.
pub fn classify(candidate: &str) -> Result<Classified<'_>, DetectError> {
    let parts: Vec<&str> = candidate.split('/').collect();
    if parts.len() < 2 {
        return Err(DetectError::invalid_shape(candidate));
    }

    let labels: Vec<&str> = parts[0].split('.').collect();
    let descriptor = SHAPES
        .iter()
        .find(|d| (d.matches)(&labels))
        .ok_or_else(|| DetectError::invalid_shape(candidate))?;

    tracing::trace!(
        shape = %descriptor.shape,
        labels = labels.len(),
        "classified S3 host"
    );

    Ok(Classified {
        shape: descriptor.shape,
        host: descriptor.host,
        bucket: descriptor.bucket.map(|i| labels[i]),
        region: labels[descriptor.region],
        key: parts[1..].join("/"),
    })
}
