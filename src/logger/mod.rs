//! Logger construction and dispatch.
//!
//! # Data Flow
//! ```text
//! Tags + LoggerOptions
//!     → factory.rs (validate, bind formatter, build sinks)
//!     → Logger (fixed sink list: remote, console)
//!
//! log_warning!(logger, ..) / Logger::log(&event)
//!     → dispatcher.rs (for each sink: level >= threshold → emit)
//!     → failures collected, never short-circuit
//! ```

pub mod dispatcher;
pub mod factory;
pub mod macros;

pub use dispatcher::{DispatchError, Logger};
pub use factory::{
    build_datadog_logger, LoggerBuilder, LoggerOptions, DEFAULT_LOGGER_NAME, DEFAULT_SITE,
    DEFAULT_TIMEOUT_SECS,
};
