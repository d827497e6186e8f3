use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding the configured API key.
pub const API_KEY_ENV_VAR: &str = "CAT_API_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/cattose/config.toml` on Unix/macOS, or equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cattose").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - `CAT_API_KEY` in the environment overrides the file's api key.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path, feeding `CAT_API_KEY`
    /// from the environment through as the api-key override.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_override(path, std::env::var(API_KEY_ENV_VAR).ok())
    }

    /// Loads configuration from `path` with an explicit api-key override.
    ///
    /// A non-empty `api_key` replaces whatever the file configured; `None`
    /// or an empty string leaves the file's value in place.
    pub fn load_with_override(
        path: &Path,
        api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_owned(),
                source: e,
            })?;

            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_owned(),
                source: e,
            })?
        } else {
            Config::default()
        };

        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            config.api.api_key = Some(key);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base url is non-empty
    /// - The breeds page size is at least 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if self.api.breeds_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.breeds_limit must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
