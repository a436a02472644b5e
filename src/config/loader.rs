//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::validate_config;

/// Fixed well-known resource location for the production config.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Error type for configuration loading. Every variant is startup-fatal:
/// the process never serves traffic on a bad config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to find config file with name: {0}")]
    NotFound(String),

    #[error("Error while reading config file: {0}")]
    Io(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("{0}")]
    Invalid(String),

    #[error("Config is already set")]
    AlreadySet,
}

/// Load and validate configuration from a JSON file.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    parse(&text)
}

/// Parse and validate configuration from raw JSON text.
/// No partial config is ever returned.
pub fn parse(text: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}
