//! Terminal Flappy Bird runner (default binary).
//!
//! crossterm input, a fixed-rate session from the engine crate and the
//! framebuffer renderer from the term crate.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_flappy::cli::{init_logging, load_tuning, parse_run_args, RunConfig};
use tui_flappy::core::{GameSnapshot, GameState, Tuning};
use tui_flappy::engine::{Clock, GameSession, MonotonicClock};
use tui_flappy::input::{handle_event, should_quit};
use tui_flappy::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_flappy::theme::{Character, ThemeCatalog};

/// Redraw interval while nothing moves (start screen, game over).
const IDLE_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_run_args(&args)?;
    if let Some(path) = init_logging()? {
        info!("logging to {}", path.display());
    }

    let catalog = match &config.themes_dir {
        Some(dir) => ThemeCatalog::load(dir),
        None => ThemeCatalog::builtin(),
    };
    if config.list_themes {
        for theme in catalog.themes() {
            println!("{:<8} {:<12} {}", theme.id, theme.name, theme.description);
        }
        return Ok(());
    }

    let tuning = match &config.tuning {
        Some(path) => load_tuning(path)?,
        None => Tuning::default(),
    };
    let character = Character::by_id(config.character)
        .ok_or_else(|| anyhow!("unknown character id: {}", config.character))?;
    let theme = catalog.get_or_default(&config.theme);
    let view = GameView::new(tuning, theme, character);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &view, &config, tuning);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, view: &GameView, config: &RunConfig, tuning: Tuning) -> Result<()> {
    let seed = config.seed.unwrap_or_else(seed_from_time);
    info!("seed {}, theme '{}', character {}", seed, config.theme, config.character);

    let clock = MonotonicClock::new();
    let mut session = GameSession::new(GameState::with_tuning(seed, tuning), &clock);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);

    let result = loop {
        session.snapshot_into(&mut snap);
        if throttle.should_render(clock.now_ms(), &snap) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            if let Err(e) = term.present(&mut fb) {
                break Err(e);
            }
        }

        // Block on input until the next tick is due.
        let timeout = session
            .scheduler()
            .time_until_next_tick()
            .unwrap_or(Duration::from_millis(IDLE_REDRAW_MS));
        match poll_input(timeout) {
            Ok(Some(ev)) => {
                if let Event::Key(key) = &ev {
                    if key.kind != KeyEventKind::Release && should_quit(*key) {
                        break Ok(());
                    }
                }
                if let Event::Resize(..) = &ev {
                    term.invalidate();
                    throttle.invalidate();
                }
                if let Some(action) = handle_event(&ev) {
                    session.handle_input(action);
                }
            }
            Ok(None) => {}
            Err(e) => break Err(e),
        }

        session.frame();
    };

    session.shutdown();
    result
}

fn poll_input(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
