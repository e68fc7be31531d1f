//! HTTP transport seam.
//!
//! A [`Transport`] performs exactly one exchange and reports any HTTP status
//! as a response; only failures to get a response at all are errors. Status
//! classification happens in [`crate::net::client::ApiClient`].

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::ApiError;

use super::types::{ApiResponse, HttpRequest, parse_body};

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return whatever the server answered.
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, ApiError>;
}

/// [`Transport`] over a shared `reqwest` client.
pub struct ReqwestTransport {
    http: reqwest::Client,
    endpoint: String,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Build a transport for `config.endpoint()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint(), default_timeout: config.timeout })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, ApiError> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);
        let url = format!("{}{}", self.endpoint, request.path);

        let mut builder = self
            .http
            .request(request.method.into(), &url)
            .headers(request.headers)
            .timeout(timeout);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify(&e, timeout))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| classify(&e, timeout))?;

        Ok(ApiResponse::new(status, parse_body(&text)))
    }
}

fn classify(error: &reqwest::Error, timeout: Duration) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout { timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX) }
    } else {
        ApiError::Transport(error.to_string())
    }
}
