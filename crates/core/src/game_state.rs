//! Game state module - the state machine that owns all mutable game data
//!
//! Every transition consumes the current [`GameState`] and returns the next
//! one. Nothing is shared: a caller that wants to keep an older state clones it
//! first, and the renderer only ever sees [`GameSnapshot`]s. Invalid
//! transitions (jumping after game over, advancing before start) are silent
//! no-ops that hand the state back unchanged.

use std::collections::HashSet;

use log::{debug, trace};

use crate::collision::{collision_kind, CollisionKind};
use crate::physics::{advance_physics, Decoration, Obstacle, Obstacles, INITIAL_DECORATIONS};
use crate::pool::ObstaclePool;
use crate::rng::SimpleRng;
use crate::scoring::newly_scored;
use crate::snapshot::GameSnapshot;
use crate::tuning::Tuning;
use crate::types::{GameAction, ObstacleId, DECORATION_COUNT};

/// What happened during the most recent tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvent {
    /// Obstacles scored this tick.
    pub scored: u8,
    /// Identity of the obstacle spawned this tick.
    pub spawned: Option<ObstacleId>,
    /// Set on the tick that ended the game.
    pub collision: Option<CollisionKind>,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    bird_y: f32,
    velocity: f32,
    started: bool,
    over: bool,
    score: u32,
    obstacles: Obstacles,
    decorations: [Decoration; DECORATION_COUNT],
    ground_offset: f32,
    scored_ids: HashSet<ObstacleId>,
    pub(crate) pool: ObstaclePool,
    pub(crate) rng: SimpleRng,
    tuning: Tuning,
    /// Ticks applied in the current round.
    tick: u64,
    /// Monotonic round id (increments on reset).
    episode: u32,
    last_event: Option<TickEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed and default tuning
    pub fn new(seed: u32) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u32, tuning: Tuning) -> Self {
        Self {
            bird_y: tuning.bird_start_y,
            velocity: 0.0,
            started: false,
            over: false,
            score: 0,
            obstacles: Obstacles::new(),
            decorations: INITIAL_DECORATIONS,
            ground_offset: 0.0,
            scored_ids: HashSet::new(),
            pool: ObstaclePool::new(),
            rng: SimpleRng::new(seed),
            tuning,
            tick: 0,
            episode: 0,
            last_event: None,
        }
    }

    /// Place the bird (scenario setup).
    pub fn with_bird(mut self, bird_y: f32, velocity: f32) -> Self {
        self.bird_y = bird_y;
        self.velocity = velocity;
        self
    }

    /// Add an obstacle at `x` with the given top segment height (scenario setup).
    ///
    /// The identity comes from the pool like any spawned obstacle. Ignored when
    /// every slot is live.
    pub fn with_obstacle(mut self, x: f32, gap_top: f32) -> Self {
        if self.obstacles.is_full() {
            return self;
        }
        let id = self.pool.acquire();
        self.obstacles.push(Obstacle {
            id,
            x,
            gap_top,
            gap_bottom: self.tuning.gap_bottom_for(gap_top),
        });
        self
    }

    pub fn bird_y(&self) -> f32 {
        self.bird_y
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn decorations(&self) -> &[Decoration; DECORATION_COUNT] {
        &self.decorations
    }

    pub fn ground_offset(&self) -> f32 {
        self.ground_offset
    }

    pub fn scored_ids(&self) -> &HashSet<ObstacleId> {
        &self.scored_ids
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn last_event(&self) -> Option<TickEvent> {
        self.last_event
    }

    /// Whether `advance` would change anything.
    pub fn running(&self) -> bool {
        self.started && !self.over
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.bird_y = self.bird_y;
        out.velocity = self.velocity;
        out.started = self.started;
        out.over = self.over;
        out.score = self.score;
        out.obstacles.clear();
        out.obstacles.extend(self.obstacles.iter().copied());
        out.decorations = self.decorations;
        out.ground_offset = self.ground_offset;
        out.tick = self.tick;
        out.episode = self.episode;
        out.last_event = self.last_event;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Begin play. Idempotent.
    pub fn start(mut self) -> Self {
        if self.started {
            return self;
        }
        self.started = true;
        debug!("round {} started", self.episode);
        self
    }

    /// Upward impulse. The first jump also starts the game.
    pub fn jump(mut self) -> Self {
        if self.over {
            return self;
        }
        if !self.started {
            debug!("round {} started by jump", self.episode);
        }
        self.velocity = self.tuning.jump_impulse;
        self.started = true;
        self
    }

    /// One fixed simulation tick.
    ///
    /// On collision the frame is kept as computed (positions, obstacles and
    /// score included) and `over` is set. A state that already collides (only
    /// reachable through scenario setup) ends without moving.
    pub fn advance(mut self) -> Self {
        if !self.running() {
            return self;
        }

        if let Some(kind) = collision_kind(self.bird_y, &self.obstacles, &self.tuning) {
            self.over = true;
            self.last_event = Some(TickEvent {
                collision: Some(kind),
                ..TickEvent::default()
            });
            debug!("round {} over before tick: hit {}", self.episode, kind.as_str());
            return self;
        }

        let step = advance_physics(&self);
        self.velocity = step.velocity;
        self.bird_y = step.bird_y;
        self.obstacles = step.obstacles;
        self.decorations = step.decorations;
        self.ground_offset = step.ground_offset;
        self.rng = step.rng;
        self.pool = step.pool;

        let scored = newly_scored(&self.obstacles, &self.scored_ids, &self.tuning);
        for id in scored.iter() {
            trace!("scored obstacle {:?}", id);
        }
        let scored_count = scored.len() as u8;
        self.scored_ids.extend(scored);
        self.score = self.scored_ids.len() as u32;

        let collision = collision_kind(self.bird_y, &self.obstacles, &self.tuning);
        if let Some(kind) = collision {
            self.over = true;
            debug!(
                "round {} over after {} ticks: hit {} with score {}",
                self.episode,
                self.tick + 1,
                kind.as_str(),
                self.score
            );
        }

        self.tick += 1;
        self.last_event = Some(TickEvent {
            scored: scored_count,
            spawned: step.spawned,
            collision,
        });
        self
    }

    /// Back to the initial state. Decorations keep their positions and the
    /// RNG stream continues, so the next round gets fresh gaps.
    pub fn reset(self) -> Self {
        let mut next = Self::with_tuning(0, self.tuning);
        next.rng = self.rng;
        next.decorations = self.decorations;
        next.episode = self.episode.wrapping_add(1);
        debug!("reset to round {} (previous score {})", next.episode, self.score);
        next
    }

    /// Apply a game action
    pub fn apply(self, action: GameAction) -> Self {
        match action {
            GameAction::Start => self.start(),
            GameAction::Jump => self.jump(),
            GameAction::Advance => self.advance(),
            GameAction::Reset => self.reset(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::collided;
    use crate::types::OBSTACLE_POOL_SIZE;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    /// Tuning with scenario numbers from the design notes.
    fn scenario_tuning() -> Tuning {
        Tuning {
            gravity: 0.4,
            jump_impulse: -7.0,
            pipe_speed: 2.0,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert!(!state.started());
        assert!(!state.over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.bird_y(), 250.0);
        assert_eq!(state.velocity(), 0.0);
        assert!(state.obstacles().is_empty());
        assert!(state.scored_ids().is_empty());
        assert_eq!(state.decorations(), &INITIAL_DECORATIONS);
        assert_eq!(state.episode(), 0);
        assert!(state.last_event().is_none());
    }

    #[test]
    fn test_start_is_idempotent() {
        let once = GameState::new(1).start();
        let twice = once.clone().start();
        assert!(once.started());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_advance_before_start_is_noop() {
        let state = GameState::new(1);
        let next = state.clone().advance();
        assert_eq!(state, next);
    }

    #[test]
    fn test_jump_then_advance() {
        let state = GameState::with_tuning(1, scenario_tuning())
            .with_bird(250.0, 0.0)
            .jump()
            .advance();
        assert!(approx(state.velocity(), -6.6));
        assert!(approx(state.bird_y(), 243.4));
        assert!(state.started());
        assert!(!state.over());
    }

    #[test]
    fn test_jump_starts_game() {
        let state = GameState::new(1).jump();
        assert!(state.started());
        assert_eq!(state.velocity(), JUMP);
    }

    const JUMP: f32 = crate::types::JUMP_IMPULSE;

    #[test]
    fn test_repeated_jumps_reset_velocity() {
        let mut state = GameState::new(1);
        for _ in 0..10 {
            state = state.jump();
            assert_eq!(state.velocity(), JUMP);
        }
        state = state.advance().jump().jump();
        assert_eq!(state.velocity(), JUMP);
    }

    #[test]
    fn test_jump_after_game_over_is_noop() {
        let over = GameState::new(1).with_bird(1.0, -7.0).start().advance();
        assert!(over.over());
        assert_eq!(over.clone().jump(), over);
    }

    #[test]
    fn test_advance_after_game_over_is_identity() {
        let over = GameState::new(1).with_bird(1.0, -7.0).start().advance();
        assert!(over.over());
        assert_eq!(over.clone().advance(), over);
    }

    #[test]
    fn test_spawn_appended_below_threshold() {
        let tuning = Tuning {
            spawn_threshold: 600.0,
            ..scenario_tuning()
        };
        let state = GameState::with_tuning(1, tuning)
            .with_obstacle(50.0, 100.0)
            .start()
            .advance();
        assert_eq!(state.obstacles().len(), 2);
        assert!(approx(state.obstacles()[0].x, 48.0));
        assert_eq!(state.obstacles()[1].x, tuning.spawn_x);
    }

    #[test]
    fn test_first_advance_spawns_obstacle() {
        let state = GameState::new(1).start().advance();
        assert_eq!(state.obstacles().len(), 1);
        assert_eq!(
            state.last_event().and_then(|e| e.spawned),
            Some(state.obstacles()[0].id)
        );
    }

    #[test]
    fn test_ceiling_ends_game() {
        let state = GameState::new(1).with_bird(5.0, -7.0).start().advance();
        assert_eq!(state.bird_y(), 0.0);
        assert!(state.over());
        assert_eq!(
            state.last_event().and_then(|e| e.collision),
            Some(CollisionKind::Ceiling)
        );
    }

    #[test]
    fn test_ground_ends_game() {
        let mut state = GameState::new(1).start();
        for _ in 0..500 {
            if state.over() {
                break;
            }
            state = state.advance();
        }
        assert!(state.over());
        assert!(state.bird_y() >= state.tuning().ground_limit());
    }

    #[test]
    fn test_collision_frame_kept() {
        // Bird inside the top segment once the obstacle slides over it.
        let before = GameState::new(1)
            .with_bird(100.0, 0.0)
            .with_obstacle(141.0, 180.0)
            .start();
        assert!(!collided(before.bird_y(), before.obstacles(), before.tuning()));
        let after = before.clone().advance();
        assert!(after.over());
        assert!(approx(after.obstacles()[0].x, 139.0));
        assert!(approx(after.bird_y(), 100.4));
        assert_eq!(after.tick(), 1);
    }

    #[test]
    fn test_scores_exactly_once() {
        // Midpoint (x + 30) enters [100, 140) after one tick at speed 2.
        let mut state = GameState::new(1)
            .with_bird(200.0, 0.0)
            .with_obstacle(108.0, 100.0)
            .start();
        state = state.advance();
        assert_eq!(state.score(), 1);
        assert_eq!(state.last_event().map(|e| e.scored), Some(1));

        state = state.jump().advance();
        assert_eq!(state.score(), 1);
        assert_eq!(state.last_event().map(|e| e.scored), Some(0));
        assert_eq!(state.score() as usize, state.scored_ids().len());
    }

    #[test]
    fn test_recycled_slot_scores_again() {
        let mut state = GameState::new(3).start();
        for _ in 0..800 {
            // Hover at a height every gap admits.
            state = state.with_bird(200.0, 0.0).advance();
        }
        assert!(!state.over());

        let recycled = ObstacleId::new(0, 1);
        assert!(state.scored_ids().contains(&ObstacleId::new(0, 0)));
        assert!(state.scored_ids().contains(&recycled));
        assert!(state.score() as usize > OBSTACLE_POOL_SIZE);
        assert_eq!(state.score() as usize, state.scored_ids().len());
    }

    #[test]
    fn test_collision_implies_over_next_advance() {
        let state = GameState::new(1).with_bird(0.0, 0.0).start();
        assert!(collided(state.bird_y(), state.obstacles(), state.tuning()));
        assert!(state.advance().over());
    }

    #[test]
    fn test_reset_preserves_decorations() {
        let mut state = GameState::new(1).start();
        for _ in 0..40 {
            state = state.jump().advance();
        }
        let decorations = *state.decorations();
        let reset = state.reset();
        assert_eq!(reset.decorations(), &decorations);
        assert_eq!(reset.score(), 0);
        assert!(!reset.started());
        assert!(!reset.over());
        assert!(reset.obstacles().is_empty());
        assert!(reset.scored_ids().is_empty());
        assert_eq!(reset.bird_y(), reset.tuning().bird_start_y);
        assert_eq!(reset.episode(), 1);
        assert_eq!(reset.tick(), 0);
    }

    #[test]
    fn test_apply_dispatches() {
        let state = GameState::new(1).apply(GameAction::Jump);
        assert!(state.started());
        let state = state.apply(GameAction::Advance);
        assert_eq!(state.tick(), 1);
        let state = state.apply(GameAction::Reset);
        assert!(!state.started());
        assert!(state.apply(GameAction::Start).started());
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut s = GameState::new(seed).start();
            for i in 0..300 {
                if i % 18 == 0 {
                    s = s.jump();
                }
                s = s.advance();
            }
            s
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_snapshot_matches_state() {
        let state = GameState::new(3).start().advance().advance();
        let snap = state.snapshot();
        assert_eq!(snap.bird_y, state.bird_y());
        assert_eq!(snap.velocity, state.velocity());
        assert_eq!(snap.obstacles.as_slice(), state.obstacles());
        assert_eq!(snap.decorations, *state.decorations());
        assert_eq!(snap.score, state.score());
        assert_eq!(snap.tick, 2);
        assert!(snap.started);
        assert!(!snap.over);
    }
}
