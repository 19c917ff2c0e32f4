use super::*;
use crate::store::MemoryStore;

// =============================================================
// Helpers
// =============================================================

/// Surface that records the marker and glyph in plain fields.
#[derive(Debug, Default)]
struct FakePage {
    dark: bool,
    glyph: Option<String>,
    glyph_writes: usize,
}

impl ThemeSurface for FakePage {
    fn is_dark(&self) -> bool {
        self.dark
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn set_glyph(&mut self, glyph: &str) {
        self.glyph = Some(glyph.to_owned());
        self.glyph_writes += 1;
    }
}

/// Store that reads fine but rejects every write, like a full quota.
#[derive(Debug, Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, crate::store::StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), crate::store::StorageError> {
        Err(crate::store::StorageError::Write("quota exceeded".to_owned()))
    }
}

const KEY: &str = "preferred-theme";
const SUN: &str = "☀️";
const MOON: &str = "🌙";

fn controller(store: MemoryStore, page: FakePage) -> ThemeController<MemoryStore, FakePage> {
    ThemeController::new(ToggleConfig::default(), store, page)
}

fn assert_in_sync(c: &ThemeController<MemoryStore, FakePage>) {
    let dark = c.surface().dark;
    assert_eq!(c.surface().glyph.as_deref(), Some(if dark { SUN } else { MOON }));
}

// =============================================================
// apply_saved
// =============================================================

#[test]
fn no_saved_value_starts_light() {
    let mut c = controller(MemoryStore::new(), FakePage::default());
    assert_eq!(c.apply_saved(), ThemePreference::Unset);
    assert!(!c.is_dark());
    assert_eq!(c.surface().glyph.as_deref(), Some(MOON));
}

#[test]
fn saved_dark_starts_dark() {
    let mut c = controller(MemoryStore::new().with_entry(KEY, "dark"), FakePage::default());
    assert_eq!(c.apply_saved(), ThemePreference::Dark);
    assert!(c.is_dark());
    assert_eq!(c.surface().glyph.as_deref(), Some(SUN));
}

#[test]
fn saved_light_clears_marker_from_markup() {
    let page = FakePage { dark: true, ..FakePage::default() };
    let mut c = controller(MemoryStore::new().with_entry(KEY, "light"), page);
    assert_eq!(c.apply_saved(), ThemePreference::Light);
    assert!(!c.is_dark());
    assert_eq!(c.surface().glyph.as_deref(), Some(MOON));
}

#[test]
fn missing_value_clears_marker_from_markup() {
    let page = FakePage { dark: true, ..FakePage::default() };
    let mut c = controller(MemoryStore::new(), page);
    c.apply_saved();
    assert!(!c.is_dark());
}

#[test]
fn unknown_value_is_treated_as_light() {
    let mut c = controller(MemoryStore::new().with_entry(KEY, "true"), FakePage::default());
    assert_eq!(c.apply_saved(), ThemePreference::Unset);
    assert!(!c.is_dark());
}

#[test]
fn unreadable_storage_starts_light() {
    let page = FakePage { dark: true, ..FakePage::default() };
    let mut c = controller(MemoryStore::unavailable(), page);
    assert_eq!(c.apply_saved(), ThemePreference::Unset);
    assert!(!c.is_dark());
    assert_eq!(c.surface().glyph.as_deref(), Some(MOON));
}

#[test]
fn apply_saved_does_not_write_storage() {
    let mut c = controller(MemoryStore::new(), FakePage::default());
    c.apply_saved();
    assert_eq!(c.store().peek(KEY), None);
}

#[test]
fn custom_storage_key_is_used() {
    let config = ToggleConfig { storage_key: "site-theme".to_owned(), ..ToggleConfig::default() };
    let store = MemoryStore::new().with_entry("site-theme", "dark").with_entry(KEY, "light");
    let mut c = ThemeController::new(config, store, FakePage::default());
    assert_eq!(c.apply_saved(), ThemePreference::Dark);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_unset_goes_dark_and_persists() {
    let mut c = controller(MemoryStore::new(), FakePage::default());
    c.apply_saved();
    assert!(c.toggle());
    assert!(c.is_dark());
    assert_eq!(c.surface().glyph.as_deref(), Some(SUN));
    assert_eq!(c.store().peek(KEY), Some("dark"));
}

#[test]
fn toggle_from_dark_goes_light_and_persists() {
    let mut c = controller(MemoryStore::new().with_entry(KEY, "dark"), FakePage::default());
    c.apply_saved();
    assert!(!c.toggle());
    assert!(!c.is_dark());
    assert_eq!(c.surface().glyph.as_deref(), Some(MOON));
    assert_eq!(c.store().peek(KEY), Some("light"));
}

#[test]
fn double_toggle_restores_visual_state() {
    let mut c = controller(MemoryStore::new().with_entry(KEY, "dark"), FakePage::default());
    c.apply_saved();
    c.toggle();
    c.toggle();
    assert!(c.is_dark());
    assert_eq!(c.surface().glyph.as_deref(), Some(SUN));
    assert_eq!(c.store().peek(KEY), Some("dark"));
}

#[test]
fn state_glyph_and_storage_agree_after_every_click() {
    let mut c = controller(MemoryStore::new(), FakePage::default());
    c.apply_saved();
    for click in 1..=7 {
        let dark = c.toggle();
        assert_eq!(dark, click % 2 == 1);
        assert_in_sync(&c);
        assert_eq!(c.store().peek(KEY), Some(if dark { "dark" } else { "light" }));
    }
}

#[test]
fn toggle_updates_glyph_once_per_click() {
    let mut c = controller(MemoryStore::new(), FakePage::default());
    c.apply_saved();
    c.toggle();
    c.toggle();
    assert_eq!(c.surface().glyph_writes, 3);
}

#[test]
fn toggle_with_unavailable_storage_still_flips() {
    let mut c = controller(MemoryStore::unavailable(), FakePage::default());
    c.apply_saved();
    assert!(c.toggle());
    assert_in_sync(&c);
    assert!(!c.toggle());
    assert_in_sync(&c);
}

#[test]
fn failed_write_keeps_visual_state() {
    let store = ReadOnlyStore { inner: MemoryStore::new().with_entry(KEY, "light") };
    let mut c = ThemeController::new(ToggleConfig::default(), store, FakePage::default());
    c.apply_saved();
    assert!(c.toggle());
    assert!(c.is_dark());
    assert_eq!(c.surface().glyph.as_deref(), Some(SUN));
    assert_eq!(c.store().inner.peek(KEY), Some("light"));
}

#[test]
fn custom_glyphs_follow_state() {
    let mut config = ToggleConfig::default();
    config.glyphs.dark = "light mode".to_owned();
    config.glyphs.light = "dark mode".to_owned();
    let mut c = ThemeController::new(config, MemoryStore::new(), FakePage::default());
    c.apply_saved();
    assert_eq!(c.surface().glyph.as_deref(), Some("dark mode"));
    c.toggle();
    assert_eq!(c.surface().glyph.as_deref(), Some("light mode"));
}

// =============================================================
// Reload round-trip
// =============================================================

#[test]
fn preference_survives_reinitialization() {
    let mut first = controller(MemoryStore::new(), FakePage::default());
    first.apply_saved();
    first.toggle();
    let store = first.store().clone();

    let mut reloaded = controller(store, FakePage::default());
    assert_eq!(reloaded.apply_saved(), ThemePreference::Dark);
    assert!(reloaded.is_dark());
    assert_eq!(reloaded.surface().glyph.as_deref(), Some(SUN));

    reloaded.toggle();
    let store = reloaded.store().clone();
    let mut again = controller(store, FakePage::default());
    assert_eq!(again.apply_saved(), ThemePreference::Light);
    assert!(!again.is_dark());
    assert_eq!(again.surface().glyph.as_deref(), Some(MOON));
}
