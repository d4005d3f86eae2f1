//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation rules and state management for the
//! side-scrolling game. It has **zero dependencies** on UI, input devices or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical runs
//! - **Testable**: Every rule is a pure function over an explicit state value
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: The state machine; the only place state changes
//! - [`physics`]: Bird kinematics, obstacle motion/spawning, decorations, ground scroll
//! - [`collision`]: Boundary and obstacle collision predicate
//! - [`scoring`]: Exactly-once obstacle scoring
//! - [`pool`]: Fixed ring of versioned obstacle identities
//! - [`rng`]: Seeded LCG used by the spawner
//! - [`snapshot`]: Read-only per-tick view for renderers
//! - [`tuning`]: Simulation constants grouped as one overridable value
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::GameState;
//! use tui_flappy_types::GameAction;
//!
//! // The first jump starts the game.
//! let mut game = GameState::new(12345).apply(GameAction::Jump);
//!
//! for _ in 0..10 {
//!     game = game.apply(GameAction::Advance);
//! }
//!
//! assert!(game.started());
//! assert!(!game.over());
//! assert_eq!(game.tick(), 10);
//! ```
//!
//! # Timing
//!
//! One [`GameState::advance`] is one fixed tick. Callers are expected to
//! drive it at `TICK_MS` intervals (see the engine crate's scheduler); the
//! simulation itself never reads a clock.

pub mod collision;
pub mod game_state;
pub mod physics;
pub mod pool;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tuning;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use collision::{collided, collision_kind, CollisionKind};
pub use game_state::{GameState, TickEvent};
pub use physics::{advance_physics, Decoration, Obstacle, Obstacles, PhysicsStep};
pub use pool::ObstaclePool;
pub use rng::SimpleRng;
pub use scoring::{in_scoring_span, newly_scored};
pub use snapshot::GameSnapshot;
pub use tuning::{Tuning, TuningError};
