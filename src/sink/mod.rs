//! Log sinks.
//!
//! # Responsibilities
//! - Define the `Sink` capability shared by every destination
//! - Filter by per-sink severity threshold (applied by the dispatcher)
//! - Deliver formatted records to the console or the remote intake
//!
//! # Design Decisions
//! - Composition over inheritance: each sink owns an `Arc<JsonFormatter>`
//! - Remote failures follow an explicit `ErrorPolicy` chosen at construction
//! - Writers are shared behind a mutex so concurrent calls never interleave a line

pub mod console;
pub mod remote;

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::level::Level;
use crate::record::LogEvent;
use crate::remote::SubmitError;

pub use console::{ConsoleSink, ConsoleTarget};
pub use remote::RemoteSink;

/// A destination for log events.
pub trait Sink: Send + Sync {
    /// Lowest level this sink accepts.
    fn threshold(&self) -> Level;

    /// Format and deliver one event.
    fn emit(&self, event: &LogEvent) -> Result<(), SinkError>;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    fn accepts(&self, level: Level) -> bool {
        level >= self.threshold()
    }
}

/// What a remote sink does when a submission fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Return a `DeliveryError` to the caller of `Logger::log`.
    Propagate,
    /// Write a diagnostic to the fallback channel and carry on.
    #[default]
    ReportAndContinue,
}

impl ErrorPolicy {
    pub fn from_raise_on_error(raise_on_error: bool) -> Self {
        if raise_on_error {
            ErrorPolicy::Propagate
        } else {
            ErrorPolicy::ReportAndContinue
        }
    }
}

/// A remote submission that failed.
#[derive(Debug, Error)]
#[error("An error occurred when trying to submit the log to the remote intake using {operation}")]
pub struct DeliveryError {
    pub operation: &'static str,
    #[source]
    pub source: SubmitError,
}

/// Failure of a single sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("failed to write log record: {0}")]
    Io(#[from] io::Error),

    #[error("failed to format log record: {0}")]
    Format(#[from] serde_json::Error),
}

/// A line-oriented writer shared between sinks and threads.
#[derive(Clone)]
pub struct SharedWriter(Arc<Mutex<Box<dyn Write + Send>>>);

impl SharedWriter {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self(Arc::new(Mutex::new(Box::new(writer))))
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write `line` plus a newline and flush.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))?;
        guard.write_all(line.as_bytes())?;
        guard.write_all(b"\n")?;
        guard.flush()
    }
}

impl std::fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedWriter")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// In-memory writer whose contents stay readable after it is boxed.
    #[derive(Clone, Default)]
    pub struct Capture(pub Arc<Mutex<Vec<u8>>>);

    impl Capture {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }

        pub fn lines(&self) -> Vec<String> {
            self.contents().lines().map(str::to_string).collect()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
