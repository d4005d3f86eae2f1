//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Playfield units are scaled to
//! fit the viewport; one row covers twice the units of one column to offset
//! the usual terminal glyph aspect ratio.

use crate::core::{GameSnapshot, Tuning};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::theme::{Character, ThemeDescriptor};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Smallest playfield (in cells) worth drawing.
const MIN_COLS: u16 = 12;
const MIN_ROWS: u16 = 8;

/// Ground texture period in playfield units.
const GROUND_STRIPE: f32 = 20.0;

/// Colours derived from a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub sky: Rgb,
    pub cloud: Rgb,
    pub pipe: Rgb,
    pub pipe_edge: Rgb,
    pub ground: Rgb,
    pub ground_alt: Rgb,
    pub bird: Rgb,
    pub text: Rgb,
    pub panel: Rgb,
}

impl Palette {
    pub fn from_theme(theme: &ThemeDescriptor) -> Self {
        let sky = theme
            .background_rgb()
            .map(Rgb::from_tuple)
            .unwrap_or(Rgb::new(0x87, 0xCE, 0xEB));
        Self {
            sky,
            cloud: Rgb::new(245, 245, 250),
            pipe: Rgb::new(60, 170, 60),
            pipe_edge: Rgb::new(20, 90, 20),
            ground: Rgb::new(222, 200, 130),
            ground_alt: Rgb::new(196, 170, 100),
            bird: Rgb::new(255, 220, 40),
            text: Rgb::new(255, 255, 255),
            panel: sky.shade(80),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_theme(crate::theme::ThemeCatalog::builtin().default_theme())
    }
}

/// Where the playfield lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    x0: u16,
    y0: u16,
    cols: u16,
    rows: u16,
    units_per_col: f32,
    units_per_row: f32,
}

impl Layout {
    fn fit(tuning: &Tuning, viewport: Viewport) -> Option<Self> {
        let avail_w = viewport.width.saturating_sub(2);
        let avail_h = viewport.height.saturating_sub(2);
        if avail_w < MIN_COLS || avail_h < MIN_ROWS {
            return None;
        }
        let by_width = tuning.playfield_width / f32::from(avail_w);
        let by_height = tuning.playfield_height / (2.0 * f32::from(avail_h));
        let units_per_col = by_width.max(by_height);
        let units_per_row = 2.0 * units_per_col;
        let cols = ((tuning.playfield_width / units_per_col) as u16).clamp(1, avail_w);
        let rows = ((tuning.playfield_height / units_per_row) as u16).clamp(1, avail_h);
        Some(Self {
            x0: (viewport.width - cols) / 2,
            y0: (viewport.height - rows) / 2,
            cols,
            rows,
            units_per_col,
            units_per_row,
        })
    }

    fn col(&self, x: f32) -> i32 {
        (x / self.units_per_col).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y / self.units_per_row).floor() as i32
    }

    /// Screen columns covered by `[x, x + w)`, clipped, at least one wide.
    fn col_span(&self, x: f32, w: f32) -> (u16, u16) {
        let a = self.col(x);
        let b = self.col(x + w).max(a + 1);
        (clip(a, self.cols), clip(b, self.cols))
    }

    fn row_span(&self, y: f32, h: f32) -> (u16, u16) {
        let a = self.row(y);
        let b = self.row(y + h).max(a + 1);
        (clip(a, self.rows), clip(b, self.rows))
    }
}

fn clip(v: i32, max: u16) -> u16 {
    v.clamp(0, i32::from(max)) as u16
}

/// Terminal renderer for one theme and character.
pub struct GameView {
    tuning: Tuning,
    palette: Palette,
    glyph: char,
    theme_name: String,
}

impl Default for GameView {
    fn default() -> Self {
        let catalog = crate::theme::ThemeCatalog::builtin();
        Self::new(
            Tuning::default(),
            catalog.default_theme(),
            Character::default_character(),
        )
    }
}

impl GameView {
    pub fn new(tuning: Tuning, theme: &ThemeDescriptor, character: &Character) -> Self {
        Self {
            tuning,
            palette: Palette::from_theme(theme),
            glyph: character.glyph,
            theme_name: theme.name.clone(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render into an existing framebuffer.
    ///
    /// Allocation-free once `fb` has the viewport's size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let outside = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(0, 0, 0));
        fb.clear(outside.into_cell(' '));

        let Some(layout) = Layout::fit(&self.tuning, viewport) else {
            fb.put_str(0, 0, "Terminal too small", outside);
            return;
        };

        let sky = CellStyle::new(self.palette.text, self.palette.sky);
        fb.fill_rect(layout.x0, layout.y0, layout.cols, layout.rows, ' ', sky);

        self.draw_decorations(snap, &layout, fb);
        self.draw_obstacles(snap, &layout, fb);
        self.draw_ground(snap, &layout, fb);
        self.draw_bird(snap, &layout, fb);
        self.draw_score(snap, &layout, fb);

        if !snap.started {
            self.draw_start_overlay(&layout, fb);
        } else if snap.over {
            self.draw_game_over(snap, &layout, fb);
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_decorations(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        for d in snap.decorations.iter() {
            let (c0, c1) = layout.col_span(d.x, self.tuning.decoration_width);
            let row = layout.row(d.y);
            if row < 0 || row >= i32::from(layout.rows) {
                continue;
            }
            for c in c0..c1 {
                fb.put_glyph(
                    layout.x0 + c,
                    layout.y0 + row as u16,
                    '░',
                    self.palette.cloud,
                    false,
                );
            }
        }
    }

    fn draw_obstacles(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        let t = &self.tuning;
        let body = CellStyle::new(self.palette.pipe_edge, self.palette.pipe);
        let ground_top = t.playfield_height - t.ground_height;
        for o in snap.obstacles.iter() {
            let (c0, c1) = layout.col_span(o.x, t.obstacle_width);
            if c0 == c1 {
                continue;
            }
            let (top0, top1) = layout.row_span(0.0, o.gap_top);
            let bottom_y = t.playfield_height - o.gap_bottom;
            let (bot0, bot1) = layout.row_span(bottom_y, (ground_top - bottom_y).max(0.0));
            for (r0, r1) in [(top0, top1), (bot0, bot1)] {
                for r in r0..r1 {
                    for c in c0..c1 {
                        let edge = c == c0 || c + 1 == c1;
                        let ch = if edge { '▐' } else { '█' };
                        fb.put_char(layout.x0 + c, layout.y0 + r, ch, body);
                    }
                }
            }
        }
    }

    fn draw_ground(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        let t = &self.tuning;
        let (r0, _) = layout.row_span(t.playfield_height - t.ground_height, t.ground_height);
        let light = CellStyle::new(self.palette.ground_alt, self.palette.ground);
        let dark = CellStyle::new(self.palette.ground, self.palette.ground_alt);
        for r in r0..layout.rows {
            for c in 0..layout.cols {
                let world = f32::from(c) * layout.units_per_col - snap.ground_offset;
                let stripe = (world / GROUND_STRIPE).floor() as i64;
                let (ch, style) = if (stripe + i64::from(r)).rem_euclid(2) == 0 {
                    ('▓', light)
                } else {
                    ('▒', dark)
                };
                fb.put_char(layout.x0 + c, layout.y0 + r, ch, style);
            }
        }
    }

    fn draw_bird(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        let t = &self.tuning;
        let (c0, c1) = layout.col_span(t.bird_x, t.bird_size);
        let (r0, r1) = layout.row_span(snap.bird_y, t.bird_size);
        for r in r0..r1 {
            for c in c0..c1 {
                fb.put_glyph(layout.x0 + c, layout.y0 + r, self.glyph, self.palette.bird, true);
            }
        }
    }

    fn draw_score(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        if !snap.started {
            return;
        }
        let style = CellStyle::new(self.palette.text, self.palette.panel).bold();
        let digits = digit_count(snap.score);
        let x = layout.x0 + layout.cols.saturating_sub(digits) / 2;
        fb.put_u32(x, layout.y0, snap.score, style);
    }

    fn draw_start_overlay(&self, layout: &Layout, fb: &mut FrameBuffer) {
        let style = CellStyle::new(self.palette.text, self.palette.panel).bold();
        let mid = layout.y0 + layout.rows / 3;
        self.centered(fb, layout, mid, &self.theme_name, style);
        self.centered(fb, layout, mid + 2, "Press Space to Start", style);
    }

    fn draw_game_over(&self, snap: &GameSnapshot, layout: &Layout, fb: &mut FrameBuffer) {
        let style = CellStyle::new(self.palette.text, self.palette.panel).bold();
        let plain = CellStyle::new(self.palette.text, self.palette.panel);
        let mid = layout.y0 + layout.rows / 3;
        self.centered(fb, layout, mid, "GAME OVER", style);

        let label = "Score: ";
        let width = label.len() as u16 + digit_count(snap.score);
        let x = layout.x0 + layout.cols.saturating_sub(width) / 2;
        fb.put_str(x, mid + 1, label, plain);
        fb.put_u32(x + label.len() as u16, mid + 1, snap.score, style);

        self.centered(fb, layout, mid + 3, "r: play again  q: quit", plain);
    }

    fn centered(&self, fb: &mut FrameBuffer, layout: &Layout, y: u16, text: &str, style: CellStyle) {
        let len = text.chars().count() as u16;
        let x = layout.x0 + layout.cols.saturating_sub(len) / 2;
        fb.put_str(x, y, text, style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
