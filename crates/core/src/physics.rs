//! Physics & spawner - one tick of world motion as a pure function.
//!
//! Reads a borrowed [`GameState`] and returns a [`PhysicsStep`] describing the
//! next bird kinematics, obstacle set, decorations and ground scroll. The RNG
//! and obstacle pool are copied in and handed back advanced, so the input
//! state is never touched.

use arrayvec::ArrayVec;
use log::trace;

use crate::game_state::GameState;
use crate::pool::ObstaclePool;
use crate::rng::SimpleRng;
use crate::tuning::Tuning;
use crate::types::{ObstacleId, DECORATION_COUNT, OBSTACLE_POOL_SIZE};

/// Live obstacle sequence, ordered by spawn time (rightmost last).
pub type Obstacles = ArrayVec<Obstacle, OBSTACLE_POOL_SIZE>;

/// A paired top/bottom barrier.
///
/// `gap_top` is the height of the top segment; `gap_bottom` is the height of
/// the bottom segment measured up from the bottom of the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub x: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
}

/// Background cloud. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl Decoration {
    pub const fn new(x: f32, y: f32, speed: f32) -> Self {
        Self { x, y, speed }
    }
}

/// Starting cloud layout; each cloud keeps its parallax speed for its lifetime.
pub const INITIAL_DECORATIONS: [Decoration; DECORATION_COUNT] = [
    Decoration::new(100.0, 50.0, 1.0),
    Decoration::new(300.0, 150.0, 1.5),
    Decoration::new(500.0, 100.0, 0.75),
];

/// Result of advancing the world by one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsStep {
    pub velocity: f32,
    /// Bird y after the ceiling clamp (always `>= 0`).
    pub bird_y: f32,
    pub obstacles: Obstacles,
    pub decorations: [Decoration; DECORATION_COUNT],
    pub ground_offset: f32,
    /// Identity of the obstacle spawned this tick, if any.
    pub spawned: Option<ObstacleId>,
    pub rng: SimpleRng,
    pub pool: ObstaclePool,
}

/// Advance bird, obstacles, decorations and ground by one tick.
pub fn advance_physics(state: &GameState) -> PhysicsStep {
    let tuning = state.tuning();
    let mut rng = state.rng;
    let mut pool = state.pool;

    let velocity = (state.velocity() + tuning.gravity).min(tuning.max_velocity);
    let bird_y = (state.bird_y() + velocity).max(0.0);

    let mut obstacles = move_obstacles(state.obstacles(), tuning);
    let spawned = spawn_obstacle(&mut obstacles, tuning, &mut rng, &mut pool);
    let decorations = move_decorations(state.decorations(), tuning, &mut rng);
    let ground_offset =
        (state.ground_offset() - tuning.pipe_speed).rem_euclid(2.0 * tuning.playfield_width);

    PhysicsStep {
        velocity,
        bird_y,
        obstacles,
        decorations,
        ground_offset,
        spawned,
        rng,
        pool,
    }
}

/// Shift every obstacle left and drop those fully past the left edge.
pub fn move_obstacles(obstacles: &[Obstacle], tuning: &Tuning) -> Obstacles {
    obstacles
        .iter()
        .map(|o| Obstacle {
            x: o.x - tuning.pipe_speed,
            ..*o
        })
        .filter(|o| o.x > -tuning.obstacle_width)
        .collect()
}

/// Append a new obstacle when the sequence is empty or the rightmost one has
/// crossed the spawn threshold.
///
/// A full sequence skips the spawn; the check repeats on the next tick.
pub fn spawn_obstacle(
    obstacles: &mut Obstacles,
    tuning: &Tuning,
    rng: &mut SimpleRng,
    pool: &mut ObstaclePool,
) -> Option<ObstacleId> {
    let due = match obstacles.last() {
        None => true,
        Some(rightmost) => rightmost.x < tuning.spawn_threshold,
    };
    if !due {
        return None;
    }
    if obstacles.is_full() {
        trace!("spawn deferred: all {} obstacle slots live", obstacles.len());
        return None;
    }

    let gap_top = rng.next_f32_range(tuning.min_gap_top, tuning.max_gap_top);
    let id = pool.acquire();
    obstacles.push(Obstacle {
        id,
        x: tuning.spawn_x,
        gap_top,
        gap_bottom: tuning.gap_bottom_for(gap_top),
    });
    trace!("spawned obstacle {:?} gap_top={:.1}", id, gap_top);
    Some(id)
}

/// Scroll decorations at their own speed, wrapping to the right edge with a
/// fresh vertical offset once they leave on the left.
pub fn move_decorations(
    decorations: &[Decoration; DECORATION_COUNT],
    tuning: &Tuning,
    rng: &mut SimpleRng,
) -> [Decoration; DECORATION_COUNT] {
    let mut out = *decorations;
    for d in out.iter_mut() {
        d.x -= d.speed;
        if d.x < -tuning.decoration_width {
            d.x = tuning.playfield_width + tuning.decoration_margin;
            d.y = rng.next_f32_range(0.0, tuning.decoration_max_y);
        }
    }
    out
}
