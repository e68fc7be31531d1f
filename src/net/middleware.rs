//! Request/response middleware applied by [`crate::net::client::ApiClient`].
//!
//! `on_request` hooks run in installation order before the transport;
//! `on_error` hooks run in reverse order after any failure. Hooks observe
//! the error but never replace it: the caller always receives the original.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::context::{Navigator, Notifier};
use crate::error::ApiError;
use crate::i18n::{SESSION_EXPIRED_KEY, translate};
use crate::routes::LOGIN_PATH;
use crate::state::session::SessionStore;
use crate::state::ui::UiPreferences;

use super::types::HttpRequest;

pub trait Middleware: Send + Sync {
    fn on_request(&self, _request: &mut HttpRequest) {}

    fn on_error(&self, _error: &ApiError) {}
}

// =============================================================================
// BEARER AUTH
// =============================================================================

/// Attaches `Authorization: Bearer <token>` when a session token exists.
pub struct BearerAuth {
    session: Arc<SessionStore>,
}

impl BearerAuth {
    #[must_use]
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

impl Middleware for BearerAuth {
    fn on_request(&self, request: &mut HttpRequest) {
        let Some(token) = self.session.token() else {
            return;
        };
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
            }
            Err(e) => {
                tracing::warn!(error = %e, "session token is not a valid header value; sending unauthenticated");
            }
        }
    }
}

// =============================================================================
// SESSION EXPIRY
// =============================================================================

/// Clears the session and sends the user to `/login` on 401/403; logs
/// every other failure. The notice uses the locale current at the time of
/// the failure.
pub struct SessionExpiry {
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    ui: Arc<UiPreferences>,
}

impl SessionExpiry {
    #[must_use]
    pub fn new(
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        ui: Arc<UiPreferences>,
    ) -> Self {
        Self { session, navigator, notifier, ui }
    }
}

impl Middleware for SessionExpiry {
    fn on_error(&self, error: &ApiError) {
        if !error.is_auth_failure() {
            tracing::error!(error = %error.message(), "API error");
            return;
        }

        tracing::warn!(status = ?error.status(), "session expired");
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "failed to remove persisted token");
        }
        self.notifier.error(translate(SESSION_EXPIRED_KEY, self.ui.locale()));
        self.navigator.replace(LOGIN_PATH);
    }
}
