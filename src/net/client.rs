//! Shared API client: middleware chain around a [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx response becomes [`ApiError::Status`]; transport failures pass
//! through as produced. Either way every middleware's `on_error` runs once
//! and the same error is returned. No retries, no de-duplication.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::config::DEFAULT_TIMEOUT_MS;
use crate::error::ApiError;

use super::middleware::Middleware;
use super::transport::Transport;
use super::types::{ApiResponse, HttpRequest};

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    middleware: Vec<Arc<dyn Middleware>>,
    timeout: Duration,
}

impl ApiClient {
    /// Client without middleware and the default 15 s timeout.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport, middleware: Vec::new(), timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS) }
    }

    #[must_use]
    pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Default timeout for requests that carry no override.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Dispatch `request` through the middleware chain.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses and the transport's
    /// error when no response was received.
    pub async fn send(&self, mut request: HttpRequest) -> Result<ApiResponse, ApiError> {
        request.timeout.get_or_insert(self.timeout);
        for m in &self.middleware {
            m.on_request(&mut request);
        }

        let method = request.method.as_str();
        let path = request.path.clone();
        tracing::debug!(method, path = %path, "api request");

        let result = match self.transport.send(request).await {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(ApiError::from_status(response.status, response.body)),
            Err(e) => Err(e),
        };

        match &result {
            Ok(response) => tracing::debug!(method, path = %path, status = response.status, "api response"),
            Err(error) => {
                for m in self.middleware.iter().rev() {
                    m.on_error(error);
                }
            }
        }
        result
    }

    /// `GET path` with optional query params.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn get(&self, path: &str, params: Option<&Value>) -> Result<ApiResponse, ApiError> {
        self.send(HttpRequest::get(path).params(params)).await
    }

    /// `POST path` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<ApiResponse, ApiError> {
        self.send(with_body(HttpRequest::post(path), body)).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn put(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError> {
        self.send(HttpRequest::put(path).json(body)).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(HttpRequest::delete(path)).await
    }
}

fn with_body(request: HttpRequest, body: Option<Value>) -> HttpRequest {
    match body {
        Some(body) => request.json(body),
        None => request,
    }
}
