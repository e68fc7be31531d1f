//! Log search, query suggestions, and query history.
//!
//! Everything here goes through the shared client, so a 401/403 from any of
//! these calls ends the session the same way as anywhere else.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use serde_json::{Value, json};

use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::types::ApiResponse;

// =============================================================================
// QUERY
// =============================================================================

/// `GET /logs/query`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn query_logs(client: &ApiClient, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
    client.get("/logs/query", params).await
}

/// `GET /logs/suggestions`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn suggestions(client: &ApiClient, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
    client.get("/logs/suggestions", params).await
}

/// `GET /logs/label-values`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn label_values(client: &ApiClient, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
    client.get("/logs/label-values", params).await
}

/// `GET /logs/inspect`, the backend's view of how a query will be executed.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn inspect(client: &ApiClient, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
    client.get("/logs/inspect", params).await
}

// =============================================================================
// HISTORY
// =============================================================================

/// `GET /logs/history`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn history(client: &ApiClient, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
    client.get("/logs/history", params).await
}

/// `POST /logs/history/{id}/favorite`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn toggle_favorite(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.post(&format!("/logs/history/{id}/favorite"), None).await
}

/// `PUT /logs/history/{id}/note` with `{ note }`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn update_note(client: &ApiClient, id: &str, note: &str) -> Result<ApiResponse, ApiError> {
    client
        .put(&format!("/logs/history/{id}/note"), json!({ "note": note }))
        .await
}

/// `DELETE /logs/history/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn delete_history(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.delete(&format!("/logs/history/{id}")).await
}
