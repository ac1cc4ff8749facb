//! In-process stand-in for a network call.

use std::time::Duration;

use serde_json::Value;
use specimen_types::Response;

/// Resolve to a successful [`Response`] echoing `data` after `delay`.
pub async fn fake_api_call(data: Value, delay: Duration) -> Response {
    tracing::debug!(delay_ms = delay.as_millis() as u64, "simulated fetch started");
    tokio::time::sleep(delay).await;
    let response = Response::ok(data, chrono::Utc::now().timestamp_millis());
    tracing::debug!(timestamp = response.timestamp, "simulated fetch resolved");
    response
}
