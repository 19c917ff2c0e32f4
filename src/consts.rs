//! Default constants for the theme toggle.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "preferred-theme";

// ── DOM ─────────────────────────────────────────────────────────

/// Trigger lookup. Matches the icon button and the label variant; the first
/// element in document order wins.
pub const TRIGGER_SELECTOR: &str = ".theme-toggle-button, .theme-toggle-label";

/// Class applied to `<body>` while dark mode is active.
pub const DARK_CLASS: &str = "dark-mode";

/// `<meta name=...>` carrying an optional JSON config in its `content`.
pub const CONFIG_META_NAME: &str = "theme-toggle-config";

// ── Glyphs ──────────────────────────────────────────────────────

/// Shown while dark mode is active (click to go light).
pub const SUN_GLYPH: &str = "\u{2600}\u{fe0f}";

/// Shown while light mode is active (click to go dark).
pub const MOON_GLYPH: &str = "\u{1f319}";
