//! LLM model configurations.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use serde_json::{Value, json};

use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::types::ApiResponse;

/// `GET /models`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn list_models(client: &ApiClient, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
    client.get("/models", params).await
}

/// `POST /models`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn create_model(client: &ApiClient, data: Value) -> Result<ApiResponse, ApiError> {
    client.post("/models", Some(data)).await
}

/// `PUT /models/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn update_model(client: &ApiClient, id: &str, data: Value) -> Result<ApiResponse, ApiError> {
    client.put(&format!("/models/{id}"), data).await
}

/// `DELETE /models/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn delete_model(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.delete(&format!("/models/{id}")).await
}

/// Probe an unsaved model configuration: `POST /models/test`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn test_model(client: &ApiClient, data: Value) -> Result<ApiResponse, ApiError> {
    client.post("/models/test", Some(data)).await
}

/// `POST /models/{id}/enabled` with `{ enabled }`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn set_model_enabled(client: &ApiClient, id: &str, enabled: bool) -> Result<ApiResponse, ApiError> {
    client
        .post(&format!("/models/{id}/enabled"), Some(json!({ "enabled": enabled })))
        .await
}

/// `POST /models/{id}/default`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn set_default_model(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.post(&format!("/models/{id}/default"), None).await
}
