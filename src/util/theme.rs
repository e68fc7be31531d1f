//! Theme application to the document.
//!
//! Applies the `arco-theme-dark` class and an `arco-theme` attribute to the
//! document root and body. [`DocumentTheme`] records that state so callers
//! (and tests) can inspect what the presentation layer would render.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, PoisonError};

use crate::state::ui::Theme;

pub const DARK_CLASS: &str = "arco-theme-dark";
pub const THEME_ATTRIBUTE: &str = "arco-theme";

/// Receives the theme whenever it is initialized or changed.
pub trait ThemeTarget: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// Classes and attributes of one document element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementState {
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
}

impl ElementState {
    fn apply(&mut self, theme: Theme) {
        if theme == Theme::Dark {
            self.classes.insert(DARK_CLASS.to_owned());
        } else {
            self.classes.remove(DARK_CLASS);
        }
        self.attributes
            .insert(THEME_ATTRIBUTE.to_owned(), theme.as_str().to_owned());
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub root: ElementState,
    pub body: ElementState,
}

/// In-memory document whose root and body receive theme updates.
#[derive(Debug, Default)]
pub struct DocumentTheme {
    state: Mutex<DocumentSnapshot>,
}

impl DocumentTheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> DocumentSnapshot {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ThemeTarget for DocumentTheme {
    fn apply(&self, theme: Theme) {
        let mut doc = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        doc.root.apply(theme);
        doc.body.apply(theme);
        tracing::debug!(theme = theme.as_str(), "theme applied");
    }
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;
