//! The logger: a fixed, ordered set of sinks.

use std::error::Error as _;

use thiserror::Error;

use crate::level::Level;
use crate::record::LogEvent;
use crate::sink::{Sink, SinkError};

/// One or more sinks failed while dispatching an event.
///
/// Every sink was still offered the event; this only reports the failures.
#[derive(Debug, Error)]
#[error("{} sink(s) failed to emit: {}", .failures.len(), describe(.failures))]
pub struct DispatchError {
    pub failures: Vec<(&'static str, SinkError)>,
}

fn describe(failures: &[(&'static str, SinkError)]) -> String {
    failures
        .iter()
        .map(|(sink, err)| {
            let mut text = format!("{sink}: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                // Many errors already print their source inline.
                let cause_text = cause.to_string();
                if !text.contains(&cause_text) {
                    text.push_str(&format!(" ({cause_text})"));
                }
                source = cause.source();
            }
            text
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// A named logger fanning each event out to its sinks.
pub struct Logger {
    name: String,
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    /// Create a logger. The sink set is fixed from here on.
    pub fn new(name: impl Into<String>, sinks: Vec<Box<dyn Sink>>) -> Self {
        let name = name.into();
        tracing::debug!(logger = %name, sinks = sinks.len(), "Logger constructed");
        Self { name, sinks }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Whether at least one sink would accept `level`.
    pub fn enabled(&self, level: Level) -> bool {
        self.sinks.iter().any(|s| s.accepts(level))
    }

    /// Offer `event` to every sink in order.
    ///
    /// Sinks below their threshold are skipped. A failing sink never stops
    /// delivery to the sinks after it.
    pub fn log(&self, event: &LogEvent) -> Result<(), DispatchError> {
        let mut failures = Vec::new();

        for sink in &self.sinks {
            if !sink.accepts(event.level) {
                continue;
            }
            if let Err(err) = sink.emit(event) {
                tracing::debug!(
                    logger = %self.name,
                    sink = sink.name(),
                    error = %err,
                    "Sink emit failed"
                );
                failures.push((sink.name(), err));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError { failures })
        }
    }

    /// Build and dispatch an event in one call.
    pub fn emit(
        &self,
        level: Level,
        origin: &str,
        message: impl Into<String>,
    ) -> Result<(), DispatchError> {
        self.log(&LogEvent::new(level, origin, message))
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field(
                "sinks",
                &self
                    .sinks
                    .iter()
                    .map(|s| (s.name(), s.threshold()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
