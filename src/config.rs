//! Configuration management for clinic-book.
//!
//! Handles loading configuration from a TOML file. Command-line flags and
//! environment variables override individual values (see [`crate::cli`]).

use crate::error::{ClinicError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name used under the platform config, data and state dirs.
pub const APP_DIR: &str = "clinic-book";

/// Main configuration structure for clinic-book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the address book is stored.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON data file. Defaults to the platform data directory.
    pub data_file: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Returns the default data file path.
    pub fn default_data_file() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("addressbook.json")
    }

    /// Loads configuration from a TOML file. A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ClinicError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ClinicError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// The data file to use, with `override_path` taking precedence.
    pub fn data_file(&self, override_path: Option<&Path>) -> PathBuf {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.storage.data_file.clone())
            .unwrap_or_else(Self::default_data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_valid_config() {
        let toml = r#"
[storage]
data_file = "/srv/clinic/book.json"

[logging]
level = "debug"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(
            config.storage.data_file,
            Some(PathBuf::from("/srv/clinic/book.json"))
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_optional_fields() {
        let config: Config = toml::from_str("[logging]\n").unwrap();
        assert_eq!(config.storage.data_file, None);
        assert_eq!(config.logging.level, "info");

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndata_file = 42\n").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert_eq!(err.category(), "Configuration Error");
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_data_file_precedence() {
        let config = Config {
            storage: StorageConfig {
                data_file: Some(PathBuf::from("from-config.json")),
            },
            ..Default::default()
        };
        assert_eq!(
            config.data_file(Some(Path::new("from-cli.json"))),
            PathBuf::from("from-cli.json")
        );
        assert_eq!(config.data_file(None), PathBuf::from("from-config.json"));
        assert!(Config::default()
            .data_file(None)
            .ends_with("clinic-book/addressbook.json"));
    }

    #[test]
    fn test_default_path() {
        assert!(Config::default_path().ends_with("clinic-book/config.toml"));
    }
}
