//! Terminal presentation.
//!
//! Renders a `GameSnapshot` into a framebuffer (pure, testable) and flushes
//! framebuffers to the terminal with crossterm, writing only changed cells.
//! Nothing here feeds back into the simulation.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_theme as theme;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, Viewport};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
