//! Startup configuration
//!
//! Read once at launch from `config.json` in the platform config directory.
//! Nothing is written back: the light/dark switch is in-memory only.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Start in dark mode.
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
    /// `env_logger` filter; falls back to `RUST_LOG` when unset.
    pub log_filter: Option<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: 400.0,
            window_height: 640.0,
            log_filter: None,
        }
    }
}

impl WatchConfig {
    pub fn config_path() -> PathBuf {
        config_dir("analogwatch").join("config.json")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from the default location. A missing file gives the defaults;
    /// an unreadable one is logged and also gives the defaults.
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(&Self::config_path())
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(ConfigError::NotFound(_)) => Self::default(),
            Err(e) => {
                log::warn!("ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "analogwatch", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(app_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(matches!(WatchConfig::load_from(&path), Err(ConfigError::NotFound(_))));
        assert_eq!(WatchConfig::load_or_default_from(&path), WatchConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "dark_mode": true }}"#).unwrap();
        let config = WatchConfig::load_from(file.path()).unwrap();
        assert!(config.dark_mode);
        assert_eq!(config.window_width, 400.0);
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(WatchConfig::load_from(file.path()), Err(ConfigError::Json(_))));
        assert_eq!(WatchConfig::load_or_default_from(file.path()), WatchConfig::default());
    }

    #[test]
    fn test_config_path_is_ours() {
        let path = WatchConfig::config_path();
        assert!(path.ends_with("config.json"));
        assert!(!path.to_string_lossy().to_lowercase().contains("slowcomputer"));
        assert!(path.to_string_lossy().to_lowercase().contains("analogwatch"));
    }

    #[test]
    fn test_default_starts_light() {
        assert!(!WatchConfig::default().dark_mode);
    }
}
