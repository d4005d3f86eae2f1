//! Collision detection - a pure predicate over bird position and obstacles.
//!
//! The ceiling check uses `bird_y <= 0`. Physics clamps the bird to 0, so the
//! check fires on exactly the tick in which the unclamped position reached or
//! crossed the ceiling.

use crate::physics::Obstacle;
use crate::tuning::Tuning;
use crate::types::ObstacleId;

/// What the bird hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    Ceiling,
    Ground,
    Obstacle(ObstacleId),
}

impl CollisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionKind::Ceiling => "ceiling",
            CollisionKind::Ground => "ground",
            CollisionKind::Obstacle(_) => "obstacle",
        }
    }
}

/// Whether the bird at `bird_y` overlaps a boundary or any obstacle.
pub fn collided(bird_y: f32, obstacles: &[Obstacle], tuning: &Tuning) -> bool {
    collision_kind(bird_y, obstacles, tuning).is_some()
}

/// Like [`collided`], but reports what was hit.
///
/// Boundaries are checked before obstacles; when several conditions hold the
/// choice of which one is reported carries no meaning.
pub fn collision_kind(bird_y: f32, obstacles: &[Obstacle], tuning: &Tuning) -> Option<CollisionKind> {
    if bird_y >= tuning.ground_limit() {
        return Some(CollisionKind::Ground);
    }
    if bird_y <= 0.0 {
        return Some(CollisionKind::Ceiling);
    }

    obstacles
        .iter()
        .find(|o| overlaps_horizontally(o, tuning) && outside_gap(bird_y, o, tuning))
        .map(|o| CollisionKind::Obstacle(o.id))
}

/// `[x, x + width)` intersects the bird's `[bird_x, bird_x + bird_size)`.
pub fn overlaps_horizontally(obstacle: &Obstacle, tuning: &Tuning) -> bool {
    obstacle.x < tuning.bird_x + tuning.bird_size
        && obstacle.x + tuning.obstacle_width > tuning.bird_x
}

fn outside_gap(bird_y: f32, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    bird_y < obstacle.gap_top
        || bird_y + tuning.bird_size > tuning.playfield_height - obstacle.gap_bottom
}
