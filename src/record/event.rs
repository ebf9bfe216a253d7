//! The log event produced by a single logging call.

use std::error::Error;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::level::Level;

/// One logging call. Ephemeral; consumed synchronously by the sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
    /// Function or context the call originated from.
    pub origin: String,
    /// Rendered error chain, if the call carried one.
    pub exception: Option<String>,
}

impl LogEvent {
    /// Create an event stamped with the current time.
    pub fn new(level: Level, origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            origin: origin.into(),
            exception: None,
        }
    }

    /// Override the timestamp.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attach pre-rendered exception text.
    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    /// Attach an error and its whole `source()` chain.
    pub fn with_error(self, error: &(dyn Error + 'static)) -> Self {
        let rendered = render_error_chain(error);
        self.with_exception(rendered)
    }
}

/// Render an error followed by one `Caused by:` line per source.
pub fn render_error_chain(error: &(dyn Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(out, "\nCaused by: {cause}");
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(std::io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("could not load settlement batch")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_error_chain_is_rendered() {
        let err = Outer(std::io::Error::new(std::io::ErrorKind::NotFound, "batch.csv missing"));
        let event = LogEvent::new(Level::Error, "load_batch", "load failed").with_error(&err);

        assert_eq!(
            event.exception.as_deref(),
            Some("could not load settlement batch\nCaused by: batch.csv missing")
        );
    }

    #[test]
    fn test_new_event_has_no_exception() {
        let event = LogEvent::new(Level::Info, "main", "started");
        assert_eq!(event.level, Level::Info);
        assert_eq!(event.origin, "main");
        assert!(event.exception.is_none());
    }
}
