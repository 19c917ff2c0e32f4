#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use serde::{Deserialize, Serialize};

/// Theme preference as persisted under the storage key.
///
/// `Unset` covers a missing key, an unreadable store, and any value other
/// than `"dark"` or `"light"`. It renders the same as `Light`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Interpret a raw stored value.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::Unset,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// The string written to storage, or `None` for `Unset`.
    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some("dark"),
            Self::Light => Some("light"),
            Self::Unset => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
