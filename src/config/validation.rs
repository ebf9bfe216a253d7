//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeout > 0, site resolvable to a URL)
//! - Check the console timestamp pattern
//! - Run tag validation so a bad config fails before any sink exists
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ConfigValidationError>>

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::record::check_timestamp_format;
use crate::remote::intake_url_for_site;
use crate::tags::{validate_tags, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("logger_name must not be empty")]
    EmptyLoggerName,

    #[error("remote.site must not be empty")]
    EmptySite,

    #[error("remote.site '{0}' does not form a valid intake URL")]
    InvalidSite(String),

    #[error("remote.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("console.timestamp_format '{0}' is not a valid strftime pattern")]
    InvalidTimestampFormat(String),

    #[error(transparent)]
    Tag(#[from] ValidationError),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    if config.logger_name.is_empty() {
        errors.push(ConfigValidationError::EmptyLoggerName);
    }

    // An explicit intake URL makes the site irrelevant.
    if config.remote.intake_url.is_none() {
        if config.remote.site.is_empty() {
            errors.push(ConfigValidationError::EmptySite);
        } else if intake_url_for_site(&config.remote.site).is_err() {
            errors.push(ConfigValidationError::InvalidSite(
                config.remote.site.clone(),
            ));
        }
    }

    if config.remote.timeout_secs == 0 {
        errors.push(ConfigValidationError::ZeroTimeout);
    }

    if check_timestamp_format(&config.console.timestamp_format).is_err() {
        errors.push(ConfigValidationError::InvalidTimestampFormat(
            config.console.timestamp_format.clone(),
        ));
    }

    errors.extend(
        validate_tags(&config.tags)
            .into_iter()
            .map(ConfigValidationError::Tag),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
