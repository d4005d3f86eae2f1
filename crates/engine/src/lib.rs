//! Engine module - drives the deterministic core at a fixed rate.
//!
//! The core crate only knows how to take one step. This crate decides when:
//! a [`Scheduler`] throttles the host loop to a target tick rate using an
//! injected [`Clock`], and a [`GameSession`] threads the owned game state
//! through input actions and scheduled ticks.

pub mod scheduler;
pub mod session;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use scheduler::{Clock, ManualClock, MonotonicClock, Scheduler};
pub use session::{FrameOutcome, GameSession};
