//! Scoring - decides which obstacles have just been passed.
//!
//! An obstacle's scoring coordinate is its horizontal midpoint
//! (`x + scoring_offset`). It scores on the first tick that coordinate lies in
//! the bird's span `[bird_x, bird_x + bird_size)` and only if its identity has
//! not been scored before. Identities are versioned by the pool, so a scored
//! entry never matches a later obstacle that reuses the same slot.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use crate::physics::Obstacle;
use crate::tuning::Tuning;
use crate::types::{ObstacleId, OBSTACLE_POOL_SIZE};

/// Identities scored on a single tick (bounded by the live obstacle count).
pub type NewlyScored = ArrayVec<ObstacleId, OBSTACLE_POOL_SIZE>;

/// Scoring coordinate of an obstacle.
pub fn scoring_x(obstacle: &Obstacle, tuning: &Tuning) -> f32 {
    obstacle.x + tuning.scoring_offset
}

/// Whether the obstacle's scoring coordinate lies within the bird's span.
pub fn in_scoring_span(obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let sx = scoring_x(obstacle, tuning);
    sx >= tuning.bird_x && sx < tuning.bird_x + tuning.bird_size
}

/// Obstacles that score this tick: in span and not yet in `scored`.
pub fn newly_scored(
    obstacles: &[Obstacle],
    scored: &HashSet<ObstacleId>,
    tuning: &Tuning,
) -> NewlyScored {
    obstacles
        .iter()
        .filter(|o| in_scoring_span(o, tuning) && !scored.contains(&o.id))
        .map(|o| o.id)
        .collect()
}
