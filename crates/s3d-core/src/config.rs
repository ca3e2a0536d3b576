use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Line handling for `s3d batch` (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Strip leading/trailing whitespace from each line before detection.
    pub trim_whitespace: bool,
    /// Ignore lines that are empty (after trimming, if enabled).
    pub skip_blank: bool,
    /// Only report lines that produced a canonical URL.
    pub skip_unmatched: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            skip_blank: true,
            skip_unmatched: false,
        }
    }
}

/// How results are printed: one URL per line, or one JSON object per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/// Global configuration loaded from `~/.config/s3d/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3dConfig {
    /// Log filter used when `RUST_LOG` is unset (e.g. "info,s3d=debug").
    #[serde(default)]
    pub log_filter: Option<String>,
    /// Default output format; `--json` on the command line overrides it.
    #[serde(default)]
    pub output: OutputFormat,
    /// Optional batch settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub batch: Option<BatchConfig>,
}

impl S3dConfig {
    pub fn batch_or_default(&self) -> BatchConfig {
        self.batch.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("s3d")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<S3dConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<S3dConfig> {
    if !path.exists() {
        let default_cfg = S3dConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: S3dConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Reads `log_filter` from an existing config file without creating one.
///
/// Used before logging is up, so a missing or broken file just yields `None`;
/// [`load_or_init`] reports the real error later.
pub fn configured_log_filter() -> Option<String> {
    log_filter_at(&config_path().ok()?)
}

pub fn log_filter_at(path: &Path) -> Option<String> {
    let data = fs::read_to_string(path).ok()?;
    toml::from_str::<S3dConfig>(&data).ok()?.log_filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = S3dConfig::default();
        assert!(cfg.log_filter.is_none());
        assert_eq!(cfg.output, OutputFormat::Plain);
        assert_eq!(cfg.batch_or_default(), BatchConfig::default());
        assert!(cfg.batch_or_default().trim_whitespace);
        assert!(!cfg.batch_or_default().skip_unmatched);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = S3dConfig {
            log_filter: Some("warn".to_string()),
            output: OutputFormat::Json,
            batch: Some(BatchConfig {
                skip_unmatched: true,
                ..BatchConfig::default()
            }),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: S3dConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.log_filter.as_deref(), Some("warn"));
        assert_eq!(parsed.output, OutputFormat::Json);
        assert_eq!(parsed.batch, cfg.batch);
    }

    #[test]
    fn config_toml_empty_file() {
        let cfg: S3dConfig = toml::from_str("").unwrap();
        assert!(cfg.batch.is_none());
        assert_eq!(cfg.output, OutputFormat::Plain);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            log_filter = "debug"
            output = "json"

            [batch]
            trim_whitespace = false
            skip_blank = false
            skip_unmatched = true
        "#;
        let cfg: S3dConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
        assert_eq!(cfg.output, OutputFormat::Json);
        let batch = cfg.batch.unwrap();
        assert!(!batch.trim_whitespace);
        assert!(!batch.skip_blank);
        assert!(batch.skip_unmatched);
    }

    #[test]
    fn config_toml_rejects_unknown_output() {
        assert!(toml::from_str::<S3dConfig>("output = \"xml\"").is_err());
    }

    #[test]
    fn load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.output, OutputFormat::Plain);

        fs::write(&path, "output = \"json\"\n").unwrap();
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn log_filter_read_without_creating_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(log_filter_at(&path), None);
        assert!(!path.exists());

        fs::write(&path, "log_filter = \"warn,s3d_core=trace\"\n").unwrap();
        assert_eq!(log_filter_at(&path).as_deref(), Some("warn,s3d_core=trace"));

        fs::write(&path, "output = [not toml").unwrap();
        assert_eq!(log_filter_at(&path), None);
    }
}
