//! Remote log intake.
//!
//! # Data Flow
//! ```text
//! RemoteSink
//!     → payload.rs (HttpLog: one HttpLogItem per submission)
//!     → client.rs (LogsApi::submit_log, one HTTP POST, no retry)
//!     → Datadog logs intake v2
//! ```
//!
//! # Design Decisions
//! - `LogsApi` is a trait so sinks can be exercised without a network
//! - The HTTP client is blocking; a log call returns after the round trip
//! - Timeouts belong to the client, not to the sink

pub mod client;
pub mod payload;

pub use client::{intake_url_for_site, DatadogLogsApi, LogsApi, SubmitError, SUBMIT_OPERATION};
pub use payload::{HttpLog, HttpLogItem};
