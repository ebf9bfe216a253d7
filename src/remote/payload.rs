//! Intake payload types.

use serde::{Deserialize, Serialize};

/// A single log entry as accepted by the intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpLogItem {
    pub ddsource: String,
    /// Comma separated `key:value` tags.
    pub ddtags: String,
    /// The formatted JSON record.
    pub message: String,
    pub service: String,
}

/// Request body: a JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HttpLog(pub Vec<HttpLogItem>);

impl HttpLog {
    pub fn single(item: HttpLogItem) -> Self {
        Self(vec![item])
    }

    pub fn items(&self) -> &[HttpLogItem] {
        &self.0
    }
}
