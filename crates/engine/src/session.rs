//! GameSession: owns the game state between frames and drives it.
//!
//! The host feeds input actions with [`GameSession::handle`] and calls
//! [`GameSession::frame`] every time its loop comes around. The session keeps
//! the scheduler armed only while the game is running, so nothing ticks
//! before the first jump or after game over.

use log::{debug, info};

use crate::core::{GameSnapshot, GameState, TickEvent};
use crate::scheduler::{Clock, Scheduler};
use crate::types::{GameAction, TICK_MS};

/// What one call to [`GameSession::frame`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    pub ticked: bool,
    pub event: Option<TickEvent>,
}

pub struct GameSession<C: Clock> {
    state: GameState,
    scheduler: Scheduler<C>,
    best_score: u32,
    shut_down: bool,
}

impl<C: Clock> GameSession<C> {
    /// Session ticking at the default `TICK_MS` rate.
    pub fn new(state: GameState, clock: C) -> Self {
        Self::with_interval(state, clock, TICK_MS as u64)
    }

    pub fn with_interval(state: GameState, clock: C, interval_ms: u64) -> Self {
        let mut session = Self {
            state,
            scheduler: Scheduler::new(clock, interval_ms),
            best_score: 0,
            shut_down: false,
        };
        session.sync_scheduler();
        info!(
            "session ready (round {}, {}ms ticks)",
            session.state.episode(),
            session.scheduler.interval_ms()
        );
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scheduler(&self) -> &Scheduler<C> {
        &self.scheduler
    }

    /// Highest score seen across rounds in this session.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Apply one action immediately (between ticks).
    pub fn handle(&mut self, action: GameAction) {
        self.transition(action);
    }

    /// Apply an action coming from the player.
    ///
    /// Unlike [`GameSession::handle`], `Reset` is only honoured once the
    /// round is over ("play again"); mid-round it is ignored.
    pub fn handle_input(&mut self, action: GameAction) -> bool {
        if action == GameAction::Reset && !self.state.over() {
            debug!("ignoring reset while round {} is live", self.state.episode());
            return false;
        }
        self.transition(action);
        true
    }

    /// Advance if a tick is due.
    pub fn frame(&mut self) -> FrameOutcome {
        if !self.scheduler.poll() {
            return FrameOutcome::default();
        }
        self.transition(GameAction::Advance);
        FrameOutcome {
            ticked: true,
            event: self.state.last_event(),
        }
    }

    /// Stop ticking for good (teardown). Input is still accepted but no tick
    /// fires until a new session is built.
    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.scheduler.cancel();
        info!(
            "session shut down after {} ticks (best score {})",
            self.scheduler.ticks(),
            self.best_score
        );
    }

    fn transition(&mut self, action: GameAction) {
        let was_over = self.state.over();
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);

        if self.state.over() && !was_over {
            self.best_score = self.best_score.max(self.state.score());
            info!(
                "game over: score {} (best {})",
                self.state.score(),
                self.best_score
            );
        }
        self.sync_scheduler();
    }

    fn sync_scheduler(&mut self) {
        if self.state.running() && !self.shut_down {
            self.scheduler.resume();
        } else {
            self.scheduler.cancel();
        }
    }
}
