//! Log monitors and their notification channels.

#[cfg(test)]
#[path = "monitors_test.rs"]
mod monitors_test;

use serde_json::Value;

use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::types::ApiResponse;

// =============================================================================
// MONITORS
// =============================================================================

/// `GET /monitors`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn list_monitors(client: &ApiClient, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
    client.get("/monitors", params).await
}

/// `GET /monitors/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn get_monitor(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.get(&format!("/monitors/{id}"), None).await
}

/// `POST /monitors`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn create_monitor(client: &ApiClient, data: Value) -> Result<ApiResponse, ApiError> {
    client.post("/monitors", Some(data)).await
}

/// `PUT /monitors/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn update_monitor(client: &ApiClient, id: &str, data: Value) -> Result<ApiResponse, ApiError> {
    client.put(&format!("/monitors/{id}"), data).await
}

/// `DELETE /monitors/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn delete_monitor(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.delete(&format!("/monitors/{id}")).await
}

// =============================================================================
// CHANNELS
// =============================================================================

/// `GET /channels`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn list_channels(client: &ApiClient, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
    client.get("/channels", params).await
}

/// `GET /channels/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn get_channel(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.get(&format!("/channels/{id}"), None).await
}

/// `POST /channels`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn create_channel(client: &ApiClient, data: Value) -> Result<ApiResponse, ApiError> {
    client.post("/channels", Some(data)).await
}

/// `PUT /channels/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn update_channel(client: &ApiClient, id: &str, data: Value) -> Result<ApiResponse, ApiError> {
    client.put(&format!("/channels/{id}"), data).await
}

/// `DELETE /channels/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn delete_channel(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.delete(&format!("/channels/{id}")).await
}

/// `POST /channels/test`: send a test notification through an unsaved
/// channel configuration.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn test_channel(client: &ApiClient, data: Value) -> Result<ApiResponse, ApiError> {
    client.post("/channels/test", Some(data)).await
}
