//! Theme and character catalog.
//!
//! Themes are opaque to the simulation: the core never reads them. A renderer
//! picks one before play starts and uses its background colour, asset names
//! and text. Loading is best effort: a missing or malformed description or
//! asset directory falls back to the built-in values and logs a warning, so a
//! bad theme can never stop the game.

pub mod catalog;
pub mod character;

pub use catalog::{parse_hex_color, ThemeAssets, ThemeCatalog, ThemeDescriptor, DEFAULT_THEME_ID};
pub use character::{Character, CHARACTERS};
