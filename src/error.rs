//! Error types shared by the client, stores, and configuration.
//!
//! ERROR HANDLING
//! ==============
//! Every failed API call surfaces as an [`ApiError`]. Auth failures are
//! reacted to centrally by the session-expiry middleware but are still
//! returned to the caller unchanged.

use serde_json::Value;

/// Errors produced by API client operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success HTTP status.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("request failed"))]
    Status {
        status: u16,
        /// The body's `message` field, when the backend sent one.
        message: Option<String>,
        body: Value,
    },

    /// No response was received (connect failure, reset, bad URL).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The request was abandoned after its timeout elapsed.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A successful response lacked a field the caller depends on.
    #[error("missing expected field `{0}`")]
    MissingField(&'static str),

    /// Persisting session state failed after a successful call.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Build a status error from a raw response body.
    #[must_use]
    pub fn from_status(status: u16, body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(ToOwned::to_owned);
        Self::Status { status, message, body }
    }

    /// HTTP status of the failure, if a response was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for 401 and 403 responses.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Human-readable message: the body's `message` field, falling back to
    /// the error's own description.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Errors produced by durable storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors produced while building a [`crate::config::ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
