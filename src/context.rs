//! Explicit console context shared by the client and the router.
//!
//! DESIGN
//! ======
//! Stores are built once and handed to the pieces that need them instead of
//! being looked up from globals, so a test can assemble a console from
//! in-memory parts.

use std::sync::Arc;

use crate::net::client::ApiClient;
use crate::net::middleware::{BearerAuth, SessionExpiry};
use crate::net::transport::Transport;
use crate::routes::router::Router;
use crate::state::session::SessionStore;
use crate::state::ui::UiPreferences;
use crate::util::storage::Storage;
use crate::util::theme::ThemeTarget;

/// Performs a history-replacing navigation.
pub trait Navigator: Send + Sync {
    fn replace(&self, path: &str);
}

/// Surfaces a message to the user.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Notifier that writes user-facing messages to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[derive(Clone)]
pub struct ConsoleContext {
    pub session: Arc<SessionStore>,
    pub ui: Arc<UiPreferences>,
    pub router: Arc<Router>,
    pub notifier: Arc<dyn Notifier>,
}

impl ConsoleContext {
    /// Load stores from `storage` and wire the router to the session.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>, theme: Arc<dyn ThemeTarget>, notifier: Arc<dyn Notifier>) -> Self {
        let session = Arc::new(SessionStore::load(storage.clone()));
        let ui = Arc::new(UiPreferences::load(storage, theme));
        let router = Arc::new(Router::new(session.clone()));
        Self { session, ui, router, notifier }
    }

    /// Build an API client over `transport` with bearer injection and
    /// session-expiry handling installed.
    #[must_use]
    pub fn api_client(&self, transport: Arc<dyn Transport>) -> ApiClient {
        ApiClient::new(transport)
            .with_middleware(Arc::new(BearerAuth::new(self.session.clone())))
            .with_middleware(Arc::new(SessionExpiry::new(
                self.session.clone(),
                self.router.clone(),
                self.notifier.clone(),
                self.ui.clone(),
            )))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
