//! Guarded navigation over the static route table.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::{Navigation, Route, guard, normalize_path, redirect_target, resolve};
use crate::context::Navigator;
use crate::state::session::SessionStore;

/// Where a navigation ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landing {
    pub path: String,
    /// Matched route; `None` for unknown paths reached while signed in.
    pub route: Option<&'static Route>,
    /// The guard sent the user to `/login` instead.
    pub redirected: bool,
}

/// Tracks the current location and applies the guard before each move.
pub struct Router {
    session: Arc<SessionStore>,
    current: Mutex<String>,
    navigations: AtomicUsize,
}

impl Router {
    #[must_use]
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session, current: Mutex::new("/".to_owned()), navigations: AtomicUsize::new(0) }
    }

    /// Navigate to `path`, following static redirects and the auth guard.
    pub fn navigate(&self, path: &str) -> Landing {
        let target = redirect_target(path).unwrap_or_else(|| normalize_path(path));
        let route = resolve(target);
        let landing = match guard(route.map(|r| &r.meta), self.session.is_authenticated()) {
            Navigation::Proceed => Landing { path: target.to_owned(), route, redirected: false },
            Navigation::Redirect(to) => {
                tracing::debug!(requested = path, to, "navigation redirected");
                Landing { path: to.to_owned(), route: resolve(to), redirected: true }
            }
        };

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = landing.path.clone();
        self.navigations.fetch_add(1, Ordering::Relaxed);
        landing
    }

    #[must_use]
    pub fn current(&self) -> String {
        self.current.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of completed navigations, redirects included.
    #[must_use]
    pub fn navigations(&self) -> usize {
        self.navigations.load(Ordering::Relaxed)
    }
}

impl Navigator for Router {
    fn replace(&self, path: &str) {
        self.navigate(path);
    }
}
