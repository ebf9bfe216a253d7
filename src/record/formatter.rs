//! JSON record formatter.

use std::sync::Arc;

use chrono::format::{Item, StrftimeItems};
use serde::Serialize;
use thiserror::Error;

use crate::record::event::LogEvent;
use crate::tags::{Environment, ValidatedTags};

/// Default `chrono` strftime pattern for the `timestamp` field.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Returned for a strftime pattern `chrono` cannot render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp format '{0}'")]
pub struct InvalidTimestampFormat(pub String);

/// Check a strftime pattern before it reaches the formatter.
pub fn check_timestamp_format(format: &str) -> Result<(), InvalidTimestampFormat> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(InvalidTimestampFormat(format.to_string()));
    }
    Ok(())
}

/// The record as it is serialized. Field order is the output key order.
#[derive(Debug, Serialize)]
pub struct FormattedRecord<'a> {
    pub timestamp: String,
    pub sigla: &'a str,
    pub message: &'a str,
    pub level: &'static str,
    pub service: &'a str,
    pub version: &'a str,
    pub hostname: Option<&'a str>,
    pub env: Option<Environment>,
    #[serde(rename = "logger.name")]
    pub logger_name: &'a str,
    #[serde(rename = "correlationId")]
    pub correlation_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<&'a str>,
}

/// Renders events into JSON records enriched with the bound tags.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    tags: Arc<ValidatedTags>,
    timestamp_format: String,
}

impl JsonFormatter {
    pub fn new(tags: Arc<ValidatedTags>) -> Self {
        Self {
            tags,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Use a different strftime pattern for `timestamp`.
    pub fn with_timestamp_format(
        mut self,
        format: impl Into<String>,
    ) -> Result<Self, InvalidTimestampFormat> {
        let format = format.into();
        check_timestamp_format(&format)?;
        self.timestamp_format = format;
        Ok(self)
    }

    pub fn tags(&self) -> &ValidatedTags {
        &self.tags
    }

    /// Build the record for `event` without serializing it.
    pub fn record<'a>(&'a self, event: &'a LogEvent) -> FormattedRecord<'a> {
        let tags = &self.tags;
        FormattedRecord {
            timestamp: event.timestamp.format(&self.timestamp_format).to_string(),
            sigla: &tags.sigla,
            message: &event.message,
            level: event.level.as_str(),
            service: &tags.service,
            version: &tags.version,
            hostname: tags.hostname.as_deref(),
            env: tags.environment,
            logger_name: &event.origin,
            correlation_id: &tags.correlation_id,
            exception: event.exception.as_deref(),
        }
    }

    /// Serialize `event` as a single-line JSON object.
    pub fn format(&self, event: &LogEvent) -> serde_json::Result<String> {
        serde_json::to_string(&self.record(event))
    }
}
