//! HTTP client for the logs intake.
//!
//! # Responsibilities
//! - Build the intake endpoint from the configured site
//! - Authenticate with the API key and optional application key
//! - Submit one payload per call and report transport/status failures

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::remote::payload::HttpLog;

/// Operation name reported when a submission fails.
pub const SUBMIT_OPERATION: &str = "LogsApi.submit_log";

const API_KEY_HEADER: &str = "DD-API-KEY";
const APP_KEY_HEADER: &str = "DD-APPLICATION-KEY";

/// Why a submission did not reach the intake.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Connection, TLS, timeout or request building failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The intake answered with a non-success status.
    #[error("intake returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The payload could not be encoded.
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// Failure reported by a non-HTTP `LogsApi` implementation.
    #[error("{0}")]
    Other(String),
}

/// The external "submit log" call.
pub trait LogsApi: Send + Sync {
    fn submit_log(&self, payload: &HttpLog) -> Result<(), SubmitError>;
}

/// Intake endpoint for a site such as `datadoghq.com` or `us5.datadoghq.com`.
pub fn intake_url_for_site(site: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("https://http-intake.logs.{}/api/v2/logs", site.trim()))
}

/// Blocking `LogsApi` backed by `reqwest`.
pub struct DatadogLogsApi {
    client: Client,
    endpoint: Url,
    api_key: String,
    app_key: Option<String>,
}

impl DatadogLogsApi {
    /// Create a client posting to `endpoint`.
    pub fn new(
        endpoint: Url,
        api_key: impl Into<String>,
        app_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            app_key: app_key.filter(|k| !k.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl LogsApi for DatadogLogsApi {
    fn submit_log(&self, payload: &HttpLog) -> Result<(), SubmitError> {
        let body = serde_json::to_vec(payload)?;

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(app_key) = &self.app_key {
            request = request.header(APP_KEY_HEADER, app_key);
        }

        let response = request.body(body).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SubmitError::Status { status, body });
        }

        tracing::trace!(endpoint = %self.endpoint, %status, "Log submitted");
        Ok(())
    }
}

impl std::fmt::Debug for DatadogLogsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatadogLogsApi")
            .field("endpoint", &self.endpoint.as_str())
            .field("app_key", &self.app_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
