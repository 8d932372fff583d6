//! GameView: maps presenter state and a session snapshot into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, status line, best score, progress line, the
//! 2x2 pad grid (uncovered row by row while the surface slides), key legend.

use crate::core::SessionSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::presenter::ViewState;
use crate::types::{FeedbackKind, Phase, Symbol};

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

const TITLE: &str = "S I M O N";
const START_PROMPT: &str = "Press any key to start";
const LEGEND: &str = "[Y/1] [B/2] [R/3] [G/4]  any key: start  q: quit";
const HEADER_ROWS: u16 = 4;

const BACKGROUND: Rgb = Rgb::new(12, 18, 40);
const FAILURE_BACKGROUND: Rgb = Rgb::new(150, 20, 20);

/// Cell-level geometry of the pad grid.
pub struct GameView {
    pad_w: u16,
    pad_h: u16,
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are roughly twice as tall as wide.
        Self {
            pad_w: 14,
            pad_h: 5,
            gap: 2,
        }
    }
}

impl GameView {
    pub fn new(pad_w: u16, pad_h: u16, gap: u16) -> Self {
        Self { pad_w, pad_h, gap }
    }

    pub fn grid_size(&self) -> (u16, u16) {
        (2 * self.pad_w + self.gap, 2 * self.pad_h + 1)
    }

    /// Top-left corner of `symbol`'s pad relative to the grid origin.
    pub fn pad_origin(&self, symbol: Symbol) -> (u16, u16) {
        let col = (symbol.index() % 2) as u16;
        let row = (symbol.index() / 2) as u16;
        (col * (self.pad_w + self.gap), row * (self.pad_h + 1))
    }

    /// Grid origin inside `viewport`.
    pub fn grid_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (grid_w, grid_h) = self.grid_size();
        let content_h = HEADER_ROWS + 1 + grid_h + 2;
        let top = viewport.height.saturating_sub(content_h) / 2;
        let x = viewport.width.saturating_sub(grid_w) / 2;
        (x, top + HEADER_ROWS + 1)
    }

    pub fn render_into(
        &self,
        state: &ViewState,
        snap: &SessionSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let bg = if state.failure_flash() {
            FAILURE_BACKGROUND
        } else {
            BACKGROUND
        };
        let text = CellStyle::new(Rgb::new(230, 230, 230), bg);
        fb.clear(text.cell(' '));

        let (grid_x, grid_y) = self.grid_origin(viewport);
        let top = grid_y.saturating_sub(HEADER_ROWS + 1);

        fb.put_str_centered(top, TITLE, text.bold());
        match state.status {
            Some(status) => fb.put_str_centered(top + 1, &status.to_string(), text),
            None => fb.put_str_centered(top + 1, START_PROMPT, text),
        }
        fb.put_str_centered(
            top + 2,
            &format!("Highest Score: {}", state.highest_score),
            text.dim(),
        );
        if snap.phase == Phase::Playing && snap.pattern_len > 0 {
            fb.put_str_centered(
                top + 3,
                &format!("{} / {}", snap.input_len, snap.pattern_len),
                text.dim(),
            );
        }

        let (_, grid_h) = self.grid_size();
        let visible = state.visible_rows(grid_h);
        for symbol in Symbol::ALL {
            self.draw_pad(fb, state, symbol, grid_x, grid_y, visible, bg);
        }

        fb.put_str_centered(grid_y + grid_h + 1, LEGEND, text.dim());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        state: &ViewState,
        snap: &SessionSnapshot,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, snap, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_pad(
        &self,
        fb: &mut FrameBuffer,
        state: &ViewState,
        symbol: Symbol,
        grid_x: u16,
        grid_y: u16,
        visible_rows: u16,
        bg: Rgb,
    ) {
        let (dx, dy) = self.pad_origin(symbol);
        let (bright, dark) = pad_colors(symbol);
        let fg = match state.light(symbol).map(|l| l.kind) {
            Some(FeedbackKind::Reveal) => bright,
            Some(FeedbackKind::Press) => Rgb::WHITE,
            None => dark,
        };
        let fill = CellStyle::new(fg, bg);

        let rows = visible_rows.saturating_sub(dy).min(self.pad_h);
        fb.fill_rect(grid_x + dx, grid_y + dy, self.pad_w, rows, '█', fill);

        let label_row = self.pad_h / 2;
        if rows > label_row {
            let label = pad_label(symbol);
            let lx = grid_x + dx + (self.pad_w.saturating_sub(label.len() as u16)) / 2;
            fb.put_str(
                lx,
                grid_y + dy + label_row,
                label,
                CellStyle::new(BACKGROUND, fg).bold(),
            );
        }
    }
}

/// Lit and unlit colour of each pad.
fn pad_colors(symbol: Symbol) -> (Rgb, Rgb) {
    match symbol {
        Symbol::Yellow => (Rgb::new(250, 225, 60), Rgb::new(95, 85, 25)),
        Symbol::Blue => (Rgb::new(70, 130, 250), Rgb::new(25, 45, 95)),
        Symbol::Red => (Rgb::new(240, 70, 70), Rgb::new(95, 28, 28)),
        Symbol::Green => (Rgb::new(80, 230, 110), Rgb::new(30, 90, 42)),
    }
}

fn pad_label(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::Yellow => " Y ",
        Symbol::Blue => " B ",
        Symbol::Red => " R ",
        Symbol::Green => " G ",
    }
}
