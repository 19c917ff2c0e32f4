//! Theme toggle state machine.
//!
//! Two states, light and dark, with a single transition. The dark marker on
//! the surface is the source of truth; the glyph and the stored preference
//! are rewritten from it at the end of every operation.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ToggleConfig;
use crate::preference::ThemePreference;
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;

/// Keeps the dark marker, trigger glyph, and stored preference in sync.
///
/// Storage failures never escape: reads fall back to [`ThemePreference::Unset`]
/// and failed writes leave the visual state as toggled.
#[derive(Debug)]
pub struct ThemeController<S, D> {
    config: ToggleConfig,
    store: S,
    surface: D,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    pub fn new(config: ToggleConfig, store: S, surface: D) -> Self {
        Self { config, store, surface }
    }

    /// Read the stored preference, treating any storage error as unset.
    pub fn saved_preference(&self) -> ThemePreference {
        match self.store.get(&self.config.storage_key) {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(err) => {
                log::warn!("could not read theme preference: {err}");
                ThemePreference::Unset
            }
        }
    }

    /// Apply the saved preference to the surface. Runs once at startup.
    ///
    /// Anything other than `"dark"` clears the marker, whatever the initial
    /// markup was.
    pub fn apply_saved(&mut self) -> ThemePreference {
        let preference = self.saved_preference();
        let dark = preference.is_dark();
        self.surface.set_dark(dark);
        self.surface.set_glyph(self.config.glyphs.for_state(dark));
        preference
    }

    /// Flip the theme, persist it, and update the glyph. Returns the new
    /// dark state.
    pub fn toggle(&mut self) -> bool {
        let dark = self.surface.toggle_dark();
        if let Some(value) = ThemePreference::from_dark(dark).as_stored() {
            if let Err(err) = self.store.set(&self.config.storage_key, value) {
                log::warn!("could not save theme preference: {err}");
            }
        }
        self.surface.set_glyph(self.config.glyphs.for_state(dark));
        dark
    }

    pub fn is_dark(&self) -> bool {
        self.surface.is_dark()
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}
