//! Client configuration parsed from environment variables.
//!
//! Variables share the `AILAP_` prefix used by the backend.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_BASE_PATH: &str = "/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Directory name used under the platform config dir.
const STATE_DIR_NAME: &str = "ailap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority of the backend, without a trailing slash.
    pub base_url: String,
    /// Path prefix every API route hangs off (`/api`).
    pub base_path: String,
    /// Default per-request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Directory holding persisted session and preference state.
    pub state_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            base_path: DEFAULT_BASE_PATH.to_owned(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            state_dir: default_state_dir(),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `AILAP_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `AILAP_BASE_PATH`: default `/api`
    /// - `AILAP_TIMEOUT_MS`: default 15000
    /// - `AILAP_CONNECT_TIMEOUT_MS`: default 10000
    /// - `AILAP_STATE_DIR`: default `<config dir>/ailap`
    ///
    /// # Errors
    ///
    /// Returns an error if `AILAP_BASE_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(
            &std::env::var("AILAP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
        )?;
        let base_path = normalize_base_path(
            &std::env::var("AILAP_BASE_PATH").unwrap_or_else(|_| DEFAULT_BASE_PATH.to_owned()),
        );
        let timeout = Duration::from_millis(env_parse_u64("AILAP_TIMEOUT_MS", DEFAULT_TIMEOUT_MS));
        let connect_timeout =
            Duration::from_millis(env_parse_u64("AILAP_CONNECT_TIMEOUT_MS", DEFAULT_CONNECT_TIMEOUT_MS));
        let state_dir = std::env::var_os("AILAP_STATE_DIR").map_or_else(default_state_dir, PathBuf::from);

        Ok(Self { base_url, base_path, timeout, connect_timeout, state_dir })
    }

    /// Replace the base URL, applying the same validation as [`Self::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not an http(s) URL.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(raw)?;
        Ok(self)
    }

    /// Full URL prefix for API routes, e.g. `http://127.0.0.1:8080/api`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.base_path)
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_owned()))
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() { String::new() } else { format!("/{trimmed}") }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn default_state_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".ailap"), |dir| dir.join(STATE_DIR_NAME))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
