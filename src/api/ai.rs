//! AI-assisted log analysis.

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use std::time::Duration;

use serde_json::Value;

use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::types::{ApiResponse, HttpRequest};

/// Analysis runs a model round-trip on the backend; allow it longer than
/// the default request timeout.
pub const ANALYZE_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Ask the default model to analyze `payload` (`{ prompt, logs }`) via
/// `POST /ai/analyze-logs`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn analyze_logs(client: &ApiClient, payload: Value) -> Result<ApiResponse, ApiError> {
    client
        .send(HttpRequest::post("/ai/analyze-logs").json(payload).timeout(ANALYZE_TIMEOUT))
        .await
}
