//! Log events and their JSON rendering.
//!
//! # Data Flow
//! ```text
//! call site (log_warning! etc.)
//!     → event.rs (LogEvent: timestamp, level, message, origin, exception)
//!     → formatter.rs (JsonFormatter bound to ValidatedTags)
//!     → one compact JSON string per event, shared by every sink
//! ```
//!
//! # Design Decisions
//! - Key order of the record is fixed by the struct layout
//! - Tag values are copied verbatim, no defaults are filled in here
//! - `logger.name` carries the call-site function, not the logger name

pub mod event;
pub mod formatter;

pub use event::LogEvent;
pub use formatter::{
    check_timestamp_format, FormattedRecord, InvalidTimestampFormat, JsonFormatter,
    DEFAULT_TIMESTAMP_FORMAT,
};
