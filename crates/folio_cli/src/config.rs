//! Folio configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "folio.toml";

/// Top-level configuration (folio.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scheme: SchemeConfig,
}

/// Where persisted theme state lives
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".folio")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Undo history settings
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct HistoryConfig {
    /// Maximum entries kept; unlimited when absent
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Published stylesheet settings
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Stylesheet rewritten after every change
    #[serde(default)]
    pub stylesheet: Option<PathBuf>,
}

/// Light/dark defaults
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SchemeConfig {
    /// Used when no scheme has been stored yet
    #[serde(default)]
    pub prefers_dark: bool,
}

impl FolioConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `folio.toml` in the working
    /// directory is used if present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if path.is_dir() => path.join(CONFIG_FILE),
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = PathBuf::from(CONFIG_FILE);
                if !candidate.exists() {
                    tracing::debug!("no {CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        if !path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `folio init` to create one.",
                path.display()
            );
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: FolioConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_uses_defaults() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.storage.dir, PathBuf::from(".folio"));
    }

    #[test]
    fn parses_all_sections() {
        let config: FolioConfig = toml::from_str(
            r#"
            [storage]
            dir = "/tmp/theme"

            [history]
            limit = 20

            [output]
            stylesheet = "public/theme.css"

            [scheme]
            prefers_dark = true
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.dir, PathBuf::from("/tmp/theme"));
        assert_eq!(config.history.limit, Some(20));
        assert_eq!(config.output.stylesheet, Some(PathBuf::from("public/theme.css")));
        assert!(config.scheme.prefers_dark);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FolioConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("folio init"));
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig {
            history: HistoryConfig { limit: Some(5) },
            ..FolioConfig::default()
        };
        fs::write(dir.path().join(CONFIG_FILE), config.to_toml().unwrap()).unwrap();

        assert_eq!(FolioConfig::load(Some(dir.path())).unwrap(), config);
    }
}
