//! Authentication session: bearer token plus optional user profile.
//!
//! The token is mirrored to durable storage under [`TOKEN_KEY`] so a new
//! process starts authenticated; the profile lives in memory only.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

use crate::error::StorageError;
use crate::util::storage::Storage;

pub const TOKEN_KEY: &str = "token";

/// Snapshot of the current authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// Bearer token; empty means unauthenticated.
    pub token: String,
    pub user: Option<Value>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

pub struct SessionStore {
    storage: Arc<dyn Storage>,
    inner: RwLock<Session>,
}

impl SessionStore {
    /// Restore the session from `storage`. An unreadable entry starts the
    /// session unauthenticated.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let token = match storage.get(TOKEN_KEY) {
            Ok(token) => token.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "session token unreadable; starting signed out");
                String::new()
            }
        };
        Self { storage, inner: RwLock::new(Session { token, user: None }) }
    }

    /// Current token, or `None` when unauthenticated or unreadable.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let session = self.inner.read().ok()?;
        if session.token.is_empty() { None } else { Some(session.token.clone()) }
    }

    #[must_use]
    pub fn user(&self) -> Option<Value> {
        self.snapshot().user
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Set the token in memory and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the token could not be persisted. The in-memory
    /// token is updated regardless.
    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner).token = token.to_owned();
        self.storage.set(TOKEN_KEY, token)
    }

    /// Set the user profile. Not persisted.
    pub fn set_user(&self, user: Option<Value>) {
        self.inner.write().unwrap_or_else(PoisonError::into_inner).user = user;
    }

    /// Reset token and profile and drop the persisted token.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted token could not be removed. The
    /// in-memory session is cleared regardless.
    pub fn clear(&self) -> Result<(), StorageError> {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Session::default();
        self.storage.remove(TOKEN_KEY)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
