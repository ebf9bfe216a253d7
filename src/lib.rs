//! Tag-validated structured logging to a remote intake and the console.

// Core model
pub mod level;
pub mod record;
pub mod tags;

// Destinations
pub mod remote;
pub mod sink;

// Construction and dispatch
pub mod config;
pub mod error;
pub mod logger;

pub use config::LoggerConfig;
pub use error::BuildError;
pub use level::Level;
pub use logger::{build_datadog_logger, DispatchError, Logger, LoggerBuilder, LoggerOptions};
pub use record::{JsonFormatter, LogEvent};
pub use sink::{ErrorPolicy, Sink};
pub use tags::{Tags, ValidatedTags};
