//! UI preferences: theme, locale, and sidebar collapse.
//!
//! DESIGN
//! ======
//! Theme and locale persist to durable storage; the sidebar flag is
//! transient. Every theme change is pushed to the [`ThemeTarget`] right
//! away so the presentation layer never lags the store.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::i18n::Locale;
use crate::util::storage::Storage;
use crate::util::theme::ThemeTarget;

pub const THEME_KEY: &str = "theme";
pub const LOCALE_KEY: &str = "locale";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a persisted value. Anything other than `"dark"` is light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub locale: Locale,
    pub sider_collapsed: bool,
}

pub struct UiPreferences {
    storage: Arc<dyn Storage>,
    target: Arc<dyn ThemeTarget>,
    state: RwLock<UiState>,
}

impl UiPreferences {
    /// Restore preferences from `storage`. Nothing is applied until
    /// [`Self::init_theme`] runs.
    #[must_use]
    pub fn load(storage: Arc<dyn Storage>, target: Arc<dyn ThemeTarget>) -> Self {
        let theme = read_entry(storage.as_ref(), THEME_KEY)
            .map(|raw| Theme::from_stored(&raw))
            .unwrap_or_default();
        let locale = read_entry(storage.as_ref(), LOCALE_KEY)
            .and_then(|raw| Locale::parse(&raw))
            .unwrap_or_default();
        let state = UiState { theme, locale, sider_collapsed: false };
        Self { storage, target, state: RwLock::new(state) }
    }

    #[must_use]
    pub fn snapshot(&self) -> UiState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.snapshot().theme
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme() == Theme::Dark
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.snapshot().locale
    }

    #[must_use]
    pub fn sider_collapsed(&self) -> bool {
        self.snapshot().sider_collapsed
    }

    /// Flip the theme, persist it, and apply it.
    ///
    /// # Errors
    ///
    /// Returns an error if the new theme could not be persisted. The theme
    /// is flipped and applied regardless.
    pub fn toggle_theme(&self) -> Result<Theme, StorageError> {
        let next = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.theme = state.theme.toggled();
            state.theme
        };
        self.target.apply(next);
        self.storage.set(THEME_KEY, next.as_str())?;
        Ok(next)
    }

    /// Apply the current theme without changing it.
    pub fn init_theme(&self) {
        self.target.apply(self.theme());
    }

    pub fn set_sider_collapsed(&self, collapsed: bool) {
        self.state.write().unwrap_or_else(PoisonError::into_inner).sider_collapsed = collapsed;
    }

    /// Switch the locale and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the locale could not be persisted.
    pub fn set_locale(&self, locale: Locale) -> Result<(), StorageError> {
        self.state.write().unwrap_or_else(PoisonError::into_inner).locale = locale;
        self.storage.set(LOCALE_KEY, locale.as_str())
    }
}

fn read_entry(storage: &dyn Storage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "preference unreadable; using default");
            None
        }
    }
}
