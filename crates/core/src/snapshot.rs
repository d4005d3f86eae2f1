use crate::game_state::TickEvent;
use crate::physics::{Decoration, Obstacles, INITIAL_DECORATIONS};

/// Read-only view of one tick, handed to the presentation layer.
///
/// Fixed-capacity storage: filling an existing snapshot never allocates.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub bird_y: f32,
    pub velocity: f32,
    pub started: bool,
    pub over: bool,
    pub score: u32,
    pub obstacles: Obstacles,
    pub decorations: [Decoration; crate::types::DECORATION_COUNT],
    pub ground_offset: f32,
    pub tick: u64,
    pub episode: u32,
    pub last_event: Option<TickEvent>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.bird_y = crate::types::BIRD_START_Y;
        self.velocity = 0.0;
        self.started = false;
        self.over = false;
        self.score = 0;
        self.obstacles.clear();
        self.decorations = INITIAL_DECORATIONS;
        self.ground_offset = 0.0;
        self.tick = 0;
        self.episode = 0;
        self.last_event = None;
    }

    pub fn playable(&self) -> bool {
        self.started && !self.over
    }

    /// Whether the frame can only change through input (nothing is moving).
    pub fn is_static(&self) -> bool {
        !self.playable()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            bird_y: 0.0,
            velocity: 0.0,
            started: false,
            over: false,
            score: 0,
            obstacles: Obstacles::new(),
            decorations: INITIAL_DECORATIONS,
            ground_offset: 0.0,
            tick: 0,
            episode: 0,
            last_event: None,
        };
        s.clear();
        s
    }
}
