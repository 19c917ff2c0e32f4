//! # theme-toggle
//!
//! Dark/light theme toggle for server-rendered pages. Reads the user's saved
//! preference from `localStorage`, applies the `dark-mode` class to `<body>`,
//! and keeps a trigger control's glyph in sync on every click.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Testable [`controller::ThemeController`] state machine |
//! | [`preference`] | Persisted [`preference::ThemePreference`] value |
//! | [`store`] | Storage seam and in-memory store |
//! | [`surface`] | Page seam: dark marker and trigger glyph |
//! | [`config`] | Keys, selectors, and glyphs |
//! | [`consts`] | Default constants |
//! | `dom` | Browser wiring (`hydrate` feature only) |

pub mod config;
pub mod consts;
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod preference;
pub mod store;
pub mod surface;
