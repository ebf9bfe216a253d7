//! Remote sink: submits each accepted event to the logs intake.
//!
//! # Responsibilities
//! - Format the event with the shared formatter
//! - Wrap it in an intake payload with source, tag string and service
//! - Perform exactly one submission per event
//! - Apply the configured `ErrorPolicy` on failure

use std::sync::Arc;

use crate::level::Level;
use crate::record::{JsonFormatter, LogEvent};
use crate::remote::{HttpLog, HttpLogItem, LogsApi, SUBMIT_OPERATION};
use crate::sink::{DeliveryError, ErrorPolicy, SharedWriter, Sink, SinkError};

/// Source reported when the tags do not carry `ddsource`.
pub const DEFAULT_SOURCE: &str = "rust";

pub struct RemoteSink {
    threshold: Level,
    formatter: Arc<JsonFormatter>,
    api: Arc<dyn LogsApi>,
    policy: ErrorPolicy,
    fallback: SharedWriter,
    ddsource: String,
    ddtags: String,
    service: String,
}

impl RemoteSink {
    /// Create a sink reporting failures to stderr.
    ///
    /// Source, tag string and service are taken from the formatter's tags
    /// once, here; they never change afterwards.
    pub fn new(
        threshold: Level,
        formatter: Arc<JsonFormatter>,
        api: Arc<dyn LogsApi>,
        policy: ErrorPolicy,
    ) -> Self {
        let tags = formatter.tags();
        let ddsource = tags
            .ddsource
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let ddtags = tags.to_tag_string();
        let service = tags.service.clone();

        Self {
            threshold,
            formatter,
            api,
            policy,
            fallback: SharedWriter::stderr(),
            ddsource,
            ddtags,
            service,
        }
    }

    /// Source used when the tags have no `ddsource`.
    pub fn with_default_source(mut self, source: impl Into<String>) -> Self {
        if self.formatter.tags().ddsource.as_deref().map_or(true, str::is_empty) {
            self.ddsource = source.into();
        }
        self
    }

    /// Channel receiving diagnostics under `ErrorPolicy::ReportAndContinue`.
    pub fn with_fallback(mut self, fallback: SharedWriter) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    fn payload(&self, message: String) -> HttpLog {
        HttpLog::single(HttpLogItem {
            ddsource: self.ddsource.clone(),
            ddtags: self.ddtags.clone(),
            message,
            service: self.service.clone(),
        })
    }
}

impl Sink for RemoteSink {
    fn threshold(&self) -> Level {
        self.threshold
    }

    fn emit(&self, event: &LogEvent) -> Result<(), SinkError> {
        let message = self.formatter.format(event)?;
        let payload = self.payload(message);

        let Err(cause) = self.api.submit_log(&payload) else {
            return Ok(());
        };

        match self.policy {
            ErrorPolicy::Propagate => Err(DeliveryError {
                operation: SUBMIT_OPERATION,
                source: cause,
            }
            .into()),
            ErrorPolicy::ReportAndContinue => {
                let diagnostic = format!(
                    "An error occurred when trying to submit the log to the remote intake \
                     using {SUBMIT_OPERATION}: {cause}"
                );
                if let Err(e) = self.fallback.write_line(&diagnostic) {
                    tracing::warn!(error = %e, "Failed to write remote sink diagnostic");
                }
                Ok(())
            }
        }
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
