//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Playfield
//!
//! All positions are expressed in playfield units. The vertical axis grows
//! downward (0 is the ceiling), matching the coordinate space of obstacle gaps.
//!
//! - **Width**: 400 units
//! - **Height**: 500 units, of which the bottom 80 are ground
//! - **Bird**: fixed at x = 100, 40x40 units
//!
//! # Simulation Constants
//!
//! Values are per tick unless noted:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 ticks/s) |
//! | `GRAVITY` | 0.4 | Downward acceleration |
//! | `JUMP_IMPULSE` | -7.0 | Velocity set by a jump |
//! | `MAX_VELOCITY` | 10.0 | Terminal falling velocity |
//! | `PIPE_SPEED` | 2.0 | Horizontal obstacle and ground speed |
//! | `SPAWN_THRESHOLD` | 180.0 | Rightmost obstacle x below which a new one spawns |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{GameAction, ObstacleId, OBSTACLE_POOL_SIZE};
//!
//! let action = GameAction::from_str("jump").unwrap();
//! assert_eq!(action, GameAction::Jump);
//! assert_eq!(action.as_str(), "jump");
//!
//! let id = ObstacleId::new(1, 3);
//! assert!((id.slot() as usize) < OBSTACLE_POOL_SIZE);
//! ```

/// Playfield width (units)
pub const PLAYFIELD_WIDTH: f32 = 400.0;

/// Playfield height (units), ground included
pub const PLAYFIELD_HEIGHT: f32 = 500.0;

/// Height of the ground strip at the bottom of the playfield
pub const GROUND_HEIGHT: f32 = 80.0;

/// Fixed horizontal position of the bird's left edge
pub const BIRD_X: f32 = 100.0;

/// Bird sprite is square
pub const BIRD_SIZE: f32 = 40.0;

/// Vertical position of the bird at the start of every round
pub const BIRD_START_Y: f32 = 250.0;

/// Obstacle width
pub const OBSTACLE_WIDTH: f32 = 60.0;

/// Vertical size of the gap term in `gap_bottom = H - gap_top - GAP_SIZE - GROUND_HEIGHT`
pub const GAP_SIZE: f32 = 150.0;

/// Smallest `gap_top` the spawner draws (inclusive)
pub const MIN_GAP_TOP: f32 = 50.0;

/// Largest `gap_top` the spawner draws (exclusive).
///
/// Keeps the bottom segment at least `GROUND_HEIGHT` tall.
pub const MAX_GAP_TOP: f32 = 190.0;

/// Offset from an obstacle's x to its scoring coordinate (horizontal midpoint)
pub const SCORING_OFFSET: f32 = 30.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 ticks per second)
pub const TICK_MS: u32 = 16;

/// Downward acceleration added to velocity every tick
pub const GRAVITY: f32 = 0.4;

/// Velocity a jump resets the bird to (negative is upward)
pub const JUMP_IMPULSE: f32 = -7.0;

/// Terminal falling velocity
pub const MAX_VELOCITY: f32 = 10.0;

/// Horizontal obstacle speed (also drives the ground scroll)
pub const PIPE_SPEED: f32 = 2.0;

/// Where new obstacles appear
pub const SPAWN_X: f32 = 400.0;

/// A new obstacle spawns once the rightmost one has moved left of this x
pub const SPAWN_THRESHOLD: f32 = 180.0;

/// Number of recyclable obstacle identity slots (upper bound on live obstacles)
pub const OBSTACLE_POOL_SIZE: usize = 4;

/// Number of background decorations (clouds)
pub const DECORATION_COUNT: usize = 3;

/// Width of a decoration; it wraps once fully past the left edge
pub const DECORATION_WIDTH: f32 = 100.0;

/// Distance beyond the right edge where wrapped decorations reappear
pub const DECORATION_MARGIN: f32 = 100.0;

/// Wrapped decorations get a new `y` in `[0, DECORATION_MAX_Y)`
pub const DECORATION_MAX_Y: f32 = 200.0;


/// Actions the game state machine accepts
///
/// Each call to the state machine applies exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Begin play without a jump
    Start,
    /// Upward impulse (also starts the game)
    Jump,
    /// One fixed simulation tick
    Advance,
    /// Return to the initial state, keeping the background
    Reset,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flappy_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("JUMP"), Some(GameAction::Jump));
    /// assert_eq!(GameAction::from_str("advance"), Some(GameAction::Advance));
    /// assert_eq!(GameAction::from_str("flap"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "jump" => Some(GameAction::Jump),
            "advance" => Some(GameAction::Advance),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::Jump => "jump",
            GameAction::Advance => "advance",
            GameAction::Reset => "reset",
        }
    }
}

/// Opaque obstacle identity handed out by the obstacle pool.
///
/// `slot` names one of the `OBSTACLE_POOL_SIZE` recyclable slots and
/// `generation` counts how many times that slot has been handed out, so two
/// obstacles that reuse the same slot never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId {
    slot: u8,
    generation: u32,
}

impl ObstacleId {
    pub const fn new(slot: u8, generation: u32) -> Self {
        Self { slot, generation }
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}
