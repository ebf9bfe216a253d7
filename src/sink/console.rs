//! Console sink: one JSON line per event on a local stream.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::record::{JsonFormatter, LogEvent};
use crate::sink::{SharedWriter, Sink, SinkError};

/// Standard stream a console sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    Stdout,
    #[default]
    Stderr,
}

impl ConsoleTarget {
    pub fn writer(&self) -> SharedWriter {
        match self {
            ConsoleTarget::Stdout => SharedWriter::stdout(),
            ConsoleTarget::Stderr => SharedWriter::stderr(),
        }
    }
}

pub struct ConsoleSink {
    threshold: Level,
    formatter: Arc<JsonFormatter>,
    writer: SharedWriter,
}

impl ConsoleSink {
    pub fn new(threshold: Level, formatter: Arc<JsonFormatter>, writer: SharedWriter) -> Self {
        Self {
            threshold,
            formatter,
            writer,
        }
    }

    pub fn for_target(
        threshold: Level,
        formatter: Arc<JsonFormatter>,
        target: ConsoleTarget,
    ) -> Self {
        Self::new(threshold, formatter, target.writer())
    }
}

impl Sink for ConsoleSink {
    fn threshold(&self) -> Level {
        self.threshold
    }

    fn emit(&self, event: &LogEvent) -> Result<(), SinkError> {
        let line = self.formatter.format(event)?;
        self.writer.write_line(&line)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
