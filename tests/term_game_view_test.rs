use tui_flappy::core::{GameState, Tuning};
use tui_flappy::term::{encode_diff_into, GameView, Viewport};
use tui_flappy::theme::{Character, ThemeCatalog};

fn screen_text(fb: &tui_flappy::term::FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).unwrap().ch);
        }
        out.push('\n');
    }
    out
}

#[test]
fn term_view_draws_chosen_character_glyph() {
    let catalog = ThemeCatalog::builtin();
    let character = Character::by_id(2).unwrap();
    let view = GameView::new(Tuning::default(), catalog.default_theme(), character);
    let fb = view.render(&GameState::new(1).snapshot(), Viewport::new(80, 30));
    let text = screen_text(&fb);
    assert!(text.contains('&'));
    assert!(!text.contains('@'));
}

#[test]
fn term_view_ground_scrolls_with_offset() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut state = GameState::new(1).jump();
    let before = view.render(&state.snapshot(), viewport);
    for _ in 0..5 {
        state = state.advance();
    }
    assert!(!state.over());
    let after = view.render(&state.snapshot(), viewport);

    let last_row = |fb: &tui_flappy::term::FrameBuffer| -> String {
        let y = fb.height() / 2 + 13;
        (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
    };
    assert_ne!(last_row(&before), last_row(&after));
}

#[test]
fn term_view_diff_is_small_between_adjacent_ticks() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let state = GameState::new(1).jump();
    let a = view.render(&state.snapshot(), viewport);
    let b = view.render(&state.clone().advance().snapshot(), viewport);

    let mut diff = Vec::new();
    encode_diff_into(&a, &b, &mut diff).unwrap();
    let mut same = Vec::new();
    encode_diff_into(&a, &a, &mut same).unwrap();
    assert!(diff.len() > same.len());
}

#[test]
fn term_view_themes_change_sky_only() {
    let catalog = ThemeCatalog::builtin();
    let snap = GameState::new(1).jump().snapshot();
    let viewport = Viewport::new(80, 30);
    let frames: Vec<_> = catalog
        .themes()
        .iter()
        .map(|t| {
            GameView::new(Tuning::default(), t, Character::default_character())
                .render(&snap, viewport)
        })
        .collect();
    assert_ne!(frames[0], frames[1]);
    assert_eq!(screen_text(&frames[0]), screen_text(&frames[1]));
}
