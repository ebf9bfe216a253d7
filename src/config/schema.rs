//! Configuration schema definitions.
//!
//! This module defines the configuration file layout for a logger.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::level::Level;
use crate::logger::{LoggerOptions, DEFAULT_LOGGER_NAME, DEFAULT_SITE, DEFAULT_TIMEOUT_SECS};
use crate::record::DEFAULT_TIMESTAMP_FORMAT;
use crate::sink::remote::DEFAULT_SOURCE;
use crate::sink::ConsoleTarget;
use crate::tags::Tags;

/// Root configuration of a logger.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Name of the logger.
    pub logger_name: String,

    /// Remote intake sink.
    pub remote: RemoteConfig,

    /// Console sink.
    pub console: ConsoleConfig,

    /// Tags attached to every record.
    pub tags: Tags,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            remote: RemoteConfig::default(),
            console: ConsoleConfig::default(),
            tags: Tags::default(),
        }
    }
}

/// Remote intake configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Minimum level submitted to the intake.
    pub level: Level,

    /// Intake site (e.g., "datadoghq.com", "us5.datadoghq.com").
    pub site: String,

    /// API key. Usually supplied through `DD_API_KEY`.
    pub api_key: String,

    /// Optional application key (`DD_APP_KEY`).
    pub app_key: Option<String>,

    /// Return submission failures to the caller instead of printing them.
    pub raise_on_error: bool,

    /// `ddsource` used when the tags do not set one.
    pub source: String,

    /// Timeout of one submission in seconds.
    pub timeout_secs: u64,

    /// Full intake URL; takes precedence over `site`.
    pub intake_url: Option<Url>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            level: Level::Warning,
            site: DEFAULT_SITE.to_string(),
            api_key: String::new(),
            app_key: None,
            raise_on_error: false,
            source: DEFAULT_SOURCE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            intake_url: None,
        }
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Minimum level written to the console.
    pub level: Level,

    /// Stream to write to ("stderr" or "stdout").
    pub target: ConsoleTarget,

    /// strftime pattern of the `timestamp` field.
    pub timestamp_format: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            target: ConsoleTarget::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Split into the factory inputs.
    pub fn into_parts(self) -> (Tags, LoggerOptions) {
        let options = LoggerOptions {
            remote_level: self.remote.level,
            console_level: self.console.level,
            api_key: self.remote.api_key,
            app_key: self.remote.app_key,
            site: self.remote.site,
            logger_name: self.logger_name,
            raise_on_error: self.remote.raise_on_error,
            source: self.remote.source,
            timeout: Duration::from_secs(self.remote.timeout_secs),
            intake_url: self.remote.intake_url,
            console_target: self.console.target,
            timestamp_format: self.console.timestamp_format,
        };
        (self.tags, options)
    }
}
