//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::config::validation::{validate_config, ConfigValidationError};

/// Environment variable holding the intake API key.
pub const ENV_API_KEY: &str = "DD_API_KEY";
/// Environment variable holding the application key.
pub const ENV_APP_KEY: &str = "DD_APP_KEY";
/// Environment variable holding the intake site.
pub const ENV_SITE: &str = "DD_SITE";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ConfigValidationError>),
}

fn join(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, override from the process environment, and validate a TOML file.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Read a TOML file and apply environment overrides without validating.
///
/// Callers that fill in fields afterwards must run
/// [`validate_config`] themselves.
pub fn read_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: LoggerConfig = toml::from_str(&content)?;
    apply_overrides(&mut config, |key| std::env::var(key).ok());

    tracing::debug!(path = %path.display(), "Read logger configuration");
    Ok(config)
}

/// Parse and validate configuration text. No environment lookup.
pub fn parse_config(content: &str) -> Result<LoggerConfig, ConfigError> {
    let config: LoggerConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply credential and site overrides from `lookup`.
///
/// Empty values are ignored so an exported but blank variable does not
/// erase a key set in the file.
pub fn apply_overrides<F>(config: &mut LoggerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(key) = lookup(ENV_API_KEY) {
        config.remote.api_key = key;
    }
    if let Some(key) = lookup(ENV_APP_KEY) {
        config.remote.app_key = Some(key);
    }
    if let Some(site) = lookup(ENV_SITE) {
        config.remote.site = site;
    }
}
