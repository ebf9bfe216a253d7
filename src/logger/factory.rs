//! Logger construction.
//!
//! # Responsibilities
//! - Validate tags before anything else is built
//! - Bind one formatter to the validated tags
//! - Assemble the standard topology: remote sink, then console sink
//!
//! # Design Decisions
//! - Construction is all-or-nothing; any error means no logger
//! - The intake client and writers are injectable for tests

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::error::BuildError;
use crate::level::Level;
use crate::logger::dispatcher::Logger;
use crate::record::{JsonFormatter, DEFAULT_TIMESTAMP_FORMAT};
use crate::remote::{intake_url_for_site, DatadogLogsApi, LogsApi};
use crate::sink::remote::DEFAULT_SOURCE;
use crate::sink::{ConsoleSink, ConsoleTarget, ErrorPolicy, RemoteSink, SharedWriter, Sink};
use crate::tags::Tags;

pub const DEFAULT_LOGGER_NAME: &str = "datadog_logger";
pub const DEFAULT_SITE: &str = "datadoghq.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Construction parameters for the standard remote + console logger.
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Threshold of the remote sink.
    pub remote_level: Level,
    /// Threshold of the console sink.
    pub console_level: Level,
    pub api_key: String,
    pub app_key: Option<String>,
    /// Intake site, e.g. `datadoghq.com` or `us5.datadoghq.com`.
    pub site: String,
    pub logger_name: String,
    /// Propagate remote submission failures instead of reporting them.
    pub raise_on_error: bool,
    /// `ddsource` used when the tags have none.
    pub source: String,
    /// HTTP timeout of one submission.
    pub timeout: Duration,
    /// Full intake URL; overrides `site` when set.
    pub intake_url: Option<Url>,
    pub console_target: ConsoleTarget,
    pub timestamp_format: String,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            remote_level: Level::Warning,
            console_level: Level::Debug,
            api_key: String::new(),
            app_key: None,
            site: DEFAULT_SITE.to_string(),
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            raise_on_error: false,
            source: DEFAULT_SOURCE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            intake_url: None,
            console_target: ConsoleTarget::default(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Builder for a remote + console logger.
pub struct LoggerBuilder {
    tags: Tags,
    options: LoggerOptions,
    logs_api: Option<Arc<dyn LogsApi>>,
    console_writer: Option<SharedWriter>,
    fallback_writer: Option<SharedWriter>,
}

impl LoggerBuilder {
    pub fn new(tags: Tags) -> Self {
        Self {
            tags,
            options: LoggerOptions::default(),
            logs_api: None,
            console_writer: None,
            fallback_writer: None,
        }
    }

    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    /// Use this intake client instead of the HTTP one.
    pub fn logs_api(mut self, api: Arc<dyn LogsApi>) -> Self {
        self.logs_api = Some(api);
        self
    }

    /// Write console records here instead of the configured target.
    pub fn console_writer(mut self, writer: SharedWriter) -> Self {
        self.console_writer = Some(writer);
        self
    }

    /// Write remote failure diagnostics here instead of stderr.
    pub fn fallback_writer(mut self, writer: SharedWriter) -> Self {
        self.fallback_writer = Some(writer);
        self
    }

    pub fn build(self) -> Result<Logger, BuildError> {
        let Self {
            tags,
            options,
            logs_api,
            console_writer,
            fallback_writer,
        } = self;

        let tags = Arc::new(tags.validated()?);
        let formatter = Arc::new(
            JsonFormatter::new(tags).with_timestamp_format(options.timestamp_format.clone())?,
        );

        let api: Arc<dyn LogsApi> = match logs_api {
            Some(api) => api,
            None => Arc::new(http_logs_api(&options)?),
        };

        let mut remote = RemoteSink::new(
            options.remote_level,
            Arc::clone(&formatter),
            api,
            ErrorPolicy::from_raise_on_error(options.raise_on_error),
        )
        .with_default_source(options.source.clone());
        if let Some(writer) = fallback_writer {
            remote = remote.with_fallback(writer);
        }

        let console = ConsoleSink::new(
            options.console_level,
            formatter,
            console_writer.unwrap_or_else(|| options.console_target.writer()),
        );

        tracing::debug!(
            logger = %options.logger_name,
            remote_level = %options.remote_level,
            console_level = %options.console_level,
            raise_on_error = options.raise_on_error,
            "Building logger"
        );

        let sinks: Vec<Box<dyn Sink>> = vec![Box::new(remote), Box::new(console)];
        Ok(Logger::new(options.logger_name, sinks))
    }
}

fn http_logs_api(options: &LoggerOptions) -> Result<DatadogLogsApi, BuildError> {
    let endpoint = match &options.intake_url {
        Some(url) => url.clone(),
        None => intake_url_for_site(&options.site).map_err(|source| BuildError::InvalidSite {
            site: options.site.clone(),
            source,
        })?,
    };
    Ok(DatadogLogsApi::new(
        endpoint,
        options.api_key.clone(),
        options.app_key.clone(),
        options.timeout,
    )?)
}

/// Validate `tags` and build the standard remote + console logger.
pub fn build_datadog_logger(tags: Tags, options: LoggerOptions) -> Result<Logger, BuildError> {
    LoggerBuilder::new(tags).options(options).build()
}
