use super::*;
use crate::util::storage::MemoryStorage;
use crate::util::theme::{DARK_CLASS, DocumentTheme, THEME_ATTRIBUTE};

fn prefs_with(entries: &[(&str, &str)]) -> (Arc<MemoryStorage>, Arc<DocumentTheme>, UiPreferences) {
    let storage = Arc::new(MemoryStorage::with_entries(entries.iter().copied()));
    let doc = Arc::new(DocumentTheme::new());
    let prefs = UiPreferences::load(storage.clone(), doc.clone());
    (storage, doc, prefs)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_from_stored_only_dark_is_dark() {
    assert_eq!(Theme::from_stored("dark"), Theme::Dark);
    assert_eq!(Theme::from_stored("light"), Theme::Light);
    assert_eq!(Theme::from_stored("DARK"), Theme::Light);
    assert_eq!(Theme::from_stored(""), Theme::Light);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

// =============================================================
// UiPreferences
// =============================================================

#[test]
fn load_defaults() {
    let (_, _, prefs) = prefs_with(&[]);
    let state = prefs.snapshot();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.locale, Locale::ZhCn);
    assert!(!state.sider_collapsed);
}

#[test]
fn load_restores_theme_and_locale() {
    let (_, _, prefs) = prefs_with(&[(THEME_KEY, "dark"), (LOCALE_KEY, "en-US")]);
    assert!(prefs.is_dark());
    assert_eq!(prefs.locale(), Locale::EnUs);
}

#[test]
fn load_does_not_apply_theme() {
    let (_, doc, _prefs) = prefs_with(&[(THEME_KEY, "dark")]);
    assert_eq!(doc.snapshot().root.attribute(THEME_ATTRIBUTE), None);
}

#[test]
fn unknown_locale_falls_back_to_default() {
    let (_, _, prefs) = prefs_with(&[(LOCALE_KEY, "de-DE")]);
    assert_eq!(prefs.locale(), Locale::ZhCn);
}

#[test]
fn toggle_theme_persists_and_applies() {
    let (storage, doc, prefs) = prefs_with(&[]);
    let next = prefs.toggle_theme().unwrap();

    assert_eq!(next, Theme::Dark);
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    let snap = doc.snapshot();
    assert!(snap.root.has_class(DARK_CLASS));
    assert_eq!(snap.body.attribute(THEME_ATTRIBUTE), Some("dark"));
}

#[test]
fn toggle_twice_returns_to_light() {
    let (storage, doc, prefs) = prefs_with(&[]);
    prefs.toggle_theme().unwrap();
    prefs.toggle_theme().unwrap();

    assert_eq!(prefs.theme(), Theme::Light);
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert!(!doc.snapshot().body.has_class(DARK_CLASS));
}

#[test]
fn init_theme_applies_without_toggling_or_persisting() {
    let (storage, doc, prefs) = prefs_with(&[(THEME_KEY, "dark")]);
    prefs.init_theme();

    assert_eq!(prefs.theme(), Theme::Dark);
    assert!(doc.snapshot().root.has_class(DARK_CLASS));
    assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn toggle_to_dark_then_init_matches_single_toggle() {
    let (_, single_doc, single) = prefs_with(&[]);
    single.toggle_theme().unwrap();

    let (_, doc, prefs) = prefs_with(&[]);
    prefs.toggle_theme().unwrap();
    prefs.init_theme();

    assert_eq!(doc.snapshot(), single_doc.snapshot());
}

#[test]
fn sider_collapsed_is_not_persisted() {
    let (storage, _, prefs) = prefs_with(&[]);
    prefs.set_sider_collapsed(true);
    assert!(prefs.sider_collapsed());

    let reloaded = UiPreferences::load(storage, Arc::new(DocumentTheme::new()));
    assert!(!reloaded.sider_collapsed());
}

#[test]
fn set_locale_persists() {
    let (storage, _, prefs) = prefs_with(&[]);
    prefs.set_locale(Locale::EnUs).unwrap();
    assert_eq!(prefs.locale(), Locale::EnUs);
    assert_eq!(storage.get(LOCALE_KEY).unwrap().as_deref(), Some("en-US"));
}
