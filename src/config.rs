//! Toggle configuration.
//!
//! Every field has a default, so a JSON config only needs the keys it
//! overrides. In the browser the JSON comes from
//! `<meta name="theme-toggle-config" content="...">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DARK_CLASS, MOON_GLYPH, STORAGE_KEY, SUN_GLYPH, TRIGGER_SELECTOR};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid toggle config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub storage_key: String,
    pub trigger_selector: String,
    pub dark_class: String,
    pub glyphs: Glyphs,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            trigger_selector: TRIGGER_SELECTOR.to_owned(),
            dark_class: DARK_CLASS.to_owned(),
            glyphs: Glyphs::default(),
        }
    }
}

impl ToggleConfig {
    /// Parse a JSON object, filling omitted fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Trigger text for each state.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Shown while dark mode is active.
    pub dark: String,
    /// Shown while light mode is active.
    pub light: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { dark: SUN_GLYPH.to_owned(), light: MOON_GLYPH.to_owned() }
    }
}

impl Glyphs {
    pub fn for_state(&self, dark: bool) -> &str {
        if dark { &self.dark } else { &self.light }
    }
}
