//! Viewer configuration: loading, saving, and defaults.
//!
//! The config is a small YAML file holding the persisted theme preference
//! and table presentation defaults. It is read once at startup and written
//! only on explicit user changes (the theme toggle). A missing or invalid
//! file degrades to defaults with a warning; configuration problems are
//! never fatal to the viewer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tabular::TableStyle;
use crate::theme::ThemePreference;

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file contained invalid YAML.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Persisted viewer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Light/dark preference, mutated only by the explicit user toggle.
    pub theme: ThemePreference,
    /// Table border style.
    pub table_style: TableStyle,
    /// Default for the presentational cell-wrap toggle.
    pub wrap_cells: bool,
    /// Maximum render width in columns.
    pub max_width: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            table_style: TableStyle::default(),
            wrap_cells: false,
            max_width: 100,
        }
    }
}

impl ViewerConfig {
    /// The directory holding the config file.
    pub fn config_dir() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("prettyview")
        } else if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(".config").join("prettyview")
        } else {
            PathBuf::from(".")
        }
    }

    /// Full path of the config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load the config from the default location, degrading to defaults on
    /// any failure.
    pub fn load() -> Self {
        match Self::load_from(&Self::config_path()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("using default config: {e}");
                Self::default()
            }
        }
    }

    /// Load from a specific path. A missing file yields the defaults; an
    /// unreadable or unparsable file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml_ng::from_str(&text)?)
    }

    /// Save to the default location, creating the config directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let dir = Self::config_dir();
        std::fs::create_dir_all(&dir)?;
        self.save_to(&dir.join("config.yaml"))
    }

    /// Save to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let yaml = serde_yaml_ng::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.table_style, TableStyle::Unicode);
        assert!(!config.wrap_cells);
        assert_eq!(config.max_width, 100);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig::load_from(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let config = ViewerConfig {
            theme: ThemePreference::Light,
            table_style: TableStyle::Rounded,
            wrap_cells: true,
            max_width: 72,
        };
        config.save_to(&path).unwrap();

        let loaded = ViewerConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "theme: [not, a, theme]").unwrap();

        let err = ViewerConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "theme: light\n").unwrap();

        let loaded = ViewerConfig::load_from(&path).unwrap();
        assert_eq!(loaded.theme, ThemePreference::Light);
        assert_eq!(loaded.max_width, 100);
    }
}
