//! TUI Flappy (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_flappy::{core,engine,input,term,theme,types}`
//! and holds the runner's command-line handling.

pub mod cli;

pub use tui_flappy_core as core;
pub use tui_flappy_engine as engine;
pub use tui_flappy_input as input;
pub use tui_flappy_term as term;
pub use tui_flappy_theme as theme;
pub use tui_flappy_types as types;
