//! Simulation tuning - every constant the reducer reads, grouped in one value.
//!
//! `Tuning::default()` mirrors the constants in [`crate::types`]. Callers can
//! override individual fields (tests do this to pin scenario numbers), and the
//! runner can load a partial JSON file: missing fields keep their defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub ground_height: f32,
    pub bird_x: f32,
    pub bird_size: f32,
    pub bird_start_y: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_velocity: f32,
    pub pipe_speed: f32,
    pub obstacle_width: f32,
    pub gap_size: f32,
    pub min_gap_top: f32,
    pub max_gap_top: f32,
    pub scoring_offset: f32,
    pub spawn_x: f32,
    pub spawn_threshold: f32,
    pub decoration_width: f32,
    pub decoration_margin: f32,
    pub decoration_max_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            bird_x: BIRD_X,
            bird_size: BIRD_SIZE,
            bird_start_y: BIRD_START_Y,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            max_velocity: MAX_VELOCITY,
            pipe_speed: PIPE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            min_gap_top: MIN_GAP_TOP,
            max_gap_top: MAX_GAP_TOP,
            scoring_offset: SCORING_OFFSET,
            spawn_x: SPAWN_X,
            spawn_threshold: SPAWN_THRESHOLD,
            decoration_width: DECORATION_WIDTH,
            decoration_margin: DECORATION_MARGIN,
            decoration_max_y: DECORATION_MAX_Y,
        }
    }
}

impl Tuning {
    /// `gap_bottom` for a given `gap_top`; keeps the total gap constant.
    pub fn gap_bottom_for(&self, gap_top: f32) -> f32 {
        self.playfield_height - gap_top - self.gap_size - self.ground_height
    }

    /// Largest bird y that does not touch the ground.
    pub fn ground_limit(&self) -> f32 {
        self.playfield_height - self.ground_height - self.bird_size
    }

    /// Check the relations the simulation relies on.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            return Err(TuningError::EmptyPlayfield);
        }
        if self.gravity <= 0.0 {
            return Err(TuningError::NonPositiveGravity);
        }
        if self.jump_impulse >= 0.0 {
            return Err(TuningError::DownwardJump);
        }
        if self.max_velocity <= 0.0 {
            return Err(TuningError::NonPositiveMaxVelocity);
        }
        if self.pipe_speed <= 0.0 {
            return Err(TuningError::NonPositivePipeSpeed);
        }
        // Every obstacle must spend at least one tick in the scoring span.
        if self.pipe_speed >= self.bird_size {
            return Err(TuningError::PipeSpeedExceedsBird);
        }
        if self.min_gap_top >= self.max_gap_top {
            return Err(TuningError::EmptyGapRange);
        }
        if self.gap_bottom_for(self.max_gap_top) < 0.0 {
            return Err(TuningError::GapBelowPlayfield);
        }
        let start = self.bird_start_y;
        if start <= 0.0 || start >= self.ground_limit() {
            return Err(TuningError::BirdStartOutOfBounds);
        }
        Ok(())
    }
}

/// A relation between tuning values that the simulation needs does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningError {
    EmptyPlayfield,
    NonPositiveGravity,
    DownwardJump,
    NonPositiveMaxVelocity,
    NonPositivePipeSpeed,
    PipeSpeedExceedsBird,
    EmptyGapRange,
    GapBelowPlayfield,
    BirdStartOutOfBounds,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPlayfield => write!(f, "playfield width and height must be positive"),
            Self::NonPositiveGravity => write!(f, "gravity must be positive"),
            Self::DownwardJump => write!(f, "jump_impulse must be negative (upward)"),
            Self::NonPositiveMaxVelocity => write!(f, "max_velocity must be positive"),
            Self::NonPositivePipeSpeed => write!(f, "pipe_speed must be positive"),
            Self::PipeSpeedExceedsBird => {
                write!(f, "pipe_speed must be smaller than bird_size")
            }
            Self::EmptyGapRange => write!(f, "min_gap_top must be below max_gap_top"),
            Self::GapBelowPlayfield => {
                write!(f, "max_gap_top leaves a negative bottom segment")
            }
            Self::BirdStartOutOfBounds => {
                write!(f, "bird_start_y must lie between the ceiling and the ground")
            }
        }
    }
}

impl std::error::Error for TuningError {}
