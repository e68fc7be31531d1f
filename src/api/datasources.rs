//! Data-source connections (Loki, Elasticsearch, VictoriaLogs).

#[cfg(test)]
#[path = "datasources_test.rs"]
mod datasources_test;

use serde_json::Value;

use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::types::ApiResponse;

/// `GET /datasources`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn list_data_sources(client: &ApiClient, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
    client.get("/datasources", params).await
}

/// `POST /datasources`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn create_data_source(client: &ApiClient, data: Value) -> Result<ApiResponse, ApiError> {
    client.post("/datasources", Some(data)).await
}

/// `PUT /datasources/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn update_data_source(client: &ApiClient, id: &str, data: Value) -> Result<ApiResponse, ApiError> {
    client.put(&format!("/datasources/{id}"), data).await
}

/// `DELETE /datasources/{id}`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn delete_data_source(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.delete(&format!("/datasources/{id}")).await
}

/// Test a saved connection: `POST /datasources/{id}/test`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn test_connection(client: &ApiClient, id: &str) -> Result<ApiResponse, ApiError> {
    client.post(&format!("/datasources/{id}/test"), None).await
}

/// Test an unsaved configuration: `POST /datasources/test`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn test_connection_payload(client: &ApiClient, data: Value) -> Result<ApiResponse, ApiError> {
    client.post("/datasources/test", Some(data)).await
}

/// Find one data source by scanning the full listing.
///
/// Returns `Ok(None)` when no item's id matches, including when the listing
/// is empty or has no `items`.
///
/// # Errors
///
/// Propagates the listing call's error unchanged.
pub async fn get_data_source_by_id(client: &ApiClient, id: &str) -> Result<Option<Value>, ApiError> {
    let response = list_data_sources(client, None).await?;
    Ok(find_by_id(response.data(), id).cloned())
}

/// First element of `data.items` whose id, as text, equals `id`.
fn find_by_id<'a>(data: &'a Value, id: &str) -> Option<&'a Value> {
    data.get("items")?
        .as_array()?
        .iter()
        .find(|item| item.get("id").and_then(id_text).as_deref() == Some(id))
}

fn id_text(id: &Value) -> Option<String> {
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
