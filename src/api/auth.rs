//! Authentication endpoints and the session flows built on them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use crate::error::ApiError;
use crate::net::client::ApiClient;
use crate::net::types::{ApiResponse, LoginData};
use crate::state::session::SessionStore;

/// `POST /auth/login` with `{ username, password }`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn login(client: &ApiClient, payload: Value) -> Result<ApiResponse, ApiError> {
    client.post("/auth/login", Some(payload)).await
}

/// `POST /auth/logout`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn logout(client: &ApiClient) -> Result<ApiResponse, ApiError> {
    client.post("/auth/logout", None).await
}

/// `GET /auth/profile`.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn profile(client: &ApiClient) -> Result<ApiResponse, ApiError> {
    client.get("/auth/profile", None).await
}

/// Log in and store the returned token in `session`.
///
/// # Errors
///
/// Returns the login call's error, [`ApiError::MissingField`] when the
/// response carries no token, or a storage error if it cannot be persisted.
pub async fn sign_in(client: &ApiClient, session: &SessionStore, payload: Value) -> Result<ApiResponse, ApiError> {
    let response = login(client, payload).await?;
    let token = response
        .envelope::<LoginData>()
        .ok()
        .and_then(|env| env.data)
        .map(|data| data.token)
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingField("token"))?;
    session.set_token(&token)?;
    tracing::info!("signed in");
    Ok(response)
}

/// Fetch the profile and keep its `data` on the session.
///
/// # Errors
///
/// Propagates the client's error unchanged.
pub async fn load_profile(client: &ApiClient, session: &SessionStore) -> Result<ApiResponse, ApiError> {
    let response = profile(client).await?;
    let user = response.data();
    session.set_user(if user.is_null() { None } else { Some(user.clone()) });
    Ok(response)
}

/// Log out and clear the session whether or not the backend call succeeds.
///
/// # Errors
///
/// Returns the logout call's error, or a storage error if the persisted
/// token could not be removed.
pub async fn sign_out(client: &ApiClient, session: &SessionStore) -> Result<ApiResponse, ApiError> {
    let result = logout(client).await;
    session.clear()?;
    result
}
