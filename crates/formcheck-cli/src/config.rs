//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Environment variables (logging overrides, see `logging`)
//! - Command-line arguments

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Validation settings
    pub validation: ValidationConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, yaml, json-pretty)
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log format (compact, full, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Include thread IDs
    pub thread_ids: bool,
}

/// Validation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject records with fields unknown to the form
    pub strict: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

/// File formats understood by [`Config::from_file`] and [`Config::save`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Json,
    Yaml,
    Toml,
}

impl FileKind {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let config = match FileKind::of(path) {
            FileKind::Yaml => serde_yaml::from_str(&content)?,
            FileKind::Toml => toml::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?,
            FileKind::Json => serde_json::from_str(&content)?,
        };

        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Failed to load config, trying next location");
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Location of the per-user configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("formcheck").join("config.yaml"))
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            // Current directory
            PathBuf::from(".formcheck.yaml"),
            PathBuf::from(".formcheck.json"),
            PathBuf::from(".formcheck.toml"),
        ];

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let formcheck_dir = config_dir.join("formcheck");
            paths.push(formcheck_dir.join("config.yaml"));
            paths.push(formcheck_dir.join("config.json"));
        }

        // Home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".formcheck.yaml"));
            paths.push(home_dir.join(".formcheck.json"));
        }

        paths
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileKind::of(path) {
            FileKind::Yaml => serde_yaml::to_string(self)?,
            FileKind::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize as TOML: {}", e)))?,
            FileKind::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, "human");
        assert!(config.output.color);
        assert!(config.logging.level.is_none());
        assert!(!config.validation.strict);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "validation:\n  strict: true\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.validation.strict);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_save_and_reload_each_format() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.output.format = "json".to_string();
        config.logging.level = Some("debug".to_string());

        for name in ["config.json", "config.yaml", "config.toml"] {
            let path = dir.path().join("nested").join(name);
            config.save(&path).unwrap();
            let loaded = Config::from_file(&path).unwrap();
            assert_eq!(loaded.output.format, "json", "{}", name);
            assert_eq!(loaded.logging.level.as_deref(), Some("debug"), "{}", name);
        }
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = Config::load_with_file(Some(Path::new("/nonexistent/formcheck.yaml"))).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
