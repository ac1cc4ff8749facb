use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a simulated fetch. Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    pub data: Value,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Response {
    #[must_use]
    pub fn ok(data: Value, timestamp: i64) -> Self {
        Self {
            ok: true,
            data,
            timestamp,
        }
    }

    /// The payload, treating JSON `null` as absent.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match &self.data {
            Value::Null => None,
            data => Some(data),
        }
    }

    /// The payload of `response`, or an empty object when there is none.
    #[must_use]
    pub fn data_or_empty(response: Option<&Response>) -> Value {
        response
            .and_then(Response::data)
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
    }
}
