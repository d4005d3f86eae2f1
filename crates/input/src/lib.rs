//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s. The
//! game only has one real control, so there is no repeat handling: every
//! press is a jump, and the core tolerates any jump rate.

pub mod map;

pub use tui_flappy_types as types;

pub use map::{handle_event, handle_key_event, handle_mouse_event, should_quit};
