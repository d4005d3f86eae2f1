//! Integration tests for the game loop through the facade crate.

use tui_flappy::core::{collided, CollisionKind, GameState, Tuning};
use tui_flappy::engine::{GameSession, ManualClock};
use tui_flappy::types::{GameAction, BIRD_START_Y, TICK_MS};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_jump_then_advance() {
    let state = GameState::new(7).jump().advance();
    assert!(approx(state.velocity(), -6.6));
    assert!(approx(state.bird_y(), 243.4));
    assert!(state.started());
    assert!(!state.over());
}

#[test]
fn test_spawn_threshold_appends_obstacle() {
    let tuning = Tuning {
        spawn_threshold: 600.0,
        ..Tuning::default()
    };
    let state = GameState::with_tuning(7, tuning)
        .with_obstacle(50.0, 100.0)
        .start()
        .advance();
    assert_eq!(state.obstacles().len(), 2);
    assert!(approx(state.obstacles()[0].x, 48.0));
    assert!(approx(state.obstacles()[1].x, tuning.spawn_x));
    assert!(state.last_event().unwrap().spawned.is_some());
}

#[test]
fn test_ceiling_collides() {
    let t = Tuning::default();
    assert!(collided(0.0, &[], &t));
    let state = GameState::new(7).with_bird(0.0, 0.0).start().advance();
    assert!(state.over());
    assert_eq!(
        state.last_event().unwrap().collision,
        Some(CollisionKind::Ceiling)
    );
}

#[test]
fn test_score_counts_each_obstacle_once() {
    let mut state = GameState::new(7)
        .with_bird(200.0, 0.0)
        .with_obstacle(108.0, 100.0)
        .start()
        .advance();
    assert_eq!(state.score(), 1);
    for _ in 0..3 {
        state = state.jump().advance();
        assert_eq!(state.score(), 1);
    }
    assert_eq!(state.scored_ids().len(), 1);
}

#[test]
fn test_reset_after_game_over() {
    let mut state = GameState::new(7).start();
    while !state.over() {
        state = state.advance();
    }
    let decorations = *state.decorations();

    let state = state.reset();
    assert_eq!(state.score(), 0);
    assert!(!state.over());
    assert!(!state.started());
    assert!(state.obstacles().is_empty());
    assert!(approx(state.bird_y(), BIRD_START_Y));
    assert_eq!(*state.decorations(), decorations);
    assert_eq!(state.episode(), 1);
}

#[test]
fn test_same_seed_same_run() {
    let script = |seed: u32| {
        let mut state = GameState::new(seed);
        let mut frames = Vec::new();
        for i in 0..400 {
            if i % 18 == 0 {
                state = state.jump();
            }
            state = state.advance();
            frames.push(state.snapshot());
        }
        frames
    };
    assert_eq!(script(99), script(99));
}

#[test]
fn test_obstacle_count_stays_within_pool() {
    let tuning = Tuning {
        spawn_threshold: 1_000.0,
        ..Tuning::default()
    };
    let mut state = GameState::with_tuning(3, tuning).with_bird(200.0, 0.0).start();
    for _ in 0..20 {
        // Hover inside the playfield; the gap does not matter off to the right.
        state = state.with_bird(200.0, 0.0).advance();
        assert!(state.obstacles().len() <= tui_flappy::types::OBSTACLE_POOL_SIZE);
    }
}

#[test]
fn test_session_drives_round_to_game_over_and_back() {
    let clock = ManualClock::new();
    let mut session = GameSession::new(GameState::new(5), &clock);

    assert!(!session.handle_input(GameAction::Reset));
    session.handle_input(GameAction::Jump);

    let mut ticks = 0;
    while !session.state().over() {
        clock.advance(TICK_MS as u64);
        if session.frame().ticked {
            ticks += 1;
        }
        assert!(ticks < 10_000);
    }
    assert_eq!(session.state().tick(), ticks);

    // A late host only gets one tick per poll.
    assert!(session.handle_input(GameAction::Reset));
    session.handle_input(GameAction::Jump);
    clock.advance(10 * TICK_MS as u64);
    assert!(session.frame().ticked);
    assert!(!session.frame().ticked);
    assert_eq!(session.state().tick(), 1);
    assert_eq!(session.state().episode(), 1);
}
