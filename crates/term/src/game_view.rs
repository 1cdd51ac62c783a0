//! GameView: maps a [`GameState`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use blockfall_storage::HighScore;

use crate::core::{GameState, Phase, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// How many high-score rows the side panel shows
const HIGH_SCORE_ROWS: usize = 5;

/// Key legend drawn left of the field: (keys, action)
const CONTROLS: [(&str, &str); 9] = [
    ("← →", "MOVE"),
    ("↑", "ROTATE"),
    ("↓", "SOFT DROP"),
    ("SPACE", "HARD DROP"),
    ("P", "PAUSE"),
    ("ENTER N", "NEW GAME"),
    ("C", "CONTINUE"),
    ("Q", "QUIT"),
    ("HJKL WASD", "ALSO MOVE"),
];
const CONTROLS_KEY_W: u16 = 10;
const CONTROLS_W: u16 = CONTROLS_KEY_W + 9;

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

/// Information shown around the board that is not part of the game state
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    /// Best first
    pub high_scores: &'a [HighScore],
    /// A saved game exists (offered on the start screen)
    pub can_resume: bool,
}

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

/// Top-left of the framed play area
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, hud: &Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let w = (FIELD_WIDTH as u16) * self.cell_w + 2;
        let h = (FIELD_HEIGHT as u16) * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);
        self.draw_field(fb, frame, state);

        if let Some(active) = state.active() {
            if let Some(ghost_y) = state.ghost_y() {
                let ghost = Piece { y: ghost_y, ..active };
                let style = CellStyle::new(Rgb::from(active.color).scaled(45), PLAY_BG).dim();
                self.draw_piece(fb, frame, &ghost, '░', style);
            }
            let style = CellStyle::new(Rgb::from(active.color), PLAY_BG).bold();
            self.draw_piece(fb, frame, &active, '█', style);
        }

        self.draw_side_panel(fb, frame, viewport, state, hud);
        self.draw_controls(fb, frame, viewport);

        match state.phase() {
            Phase::NotStarted if hud.can_resume => {
                self.draw_overlay(fb, frame, &["BLOCKFALL", "", "ENTER  NEW GAME", "C  CONTINUE"])
            }
            Phase::NotStarted => self.draw_overlay(fb, frame, &["BLOCKFALL", "", "ENTER  NEW GAME"]),
            Phase::Paused => self.draw_overlay(fb, frame, &["PAUSED", "", "P  RESUME"]),
            Phase::GameOver => {
                let score = format!("SCORE {}", state.score());
                let level = format!("LEVEL {}", state.level());
                let lines = format!("LINES {}", state.lines());
                self.draw_overlay(
                    fb,
                    frame,
                    &["GAME OVER", "", score.as_str(), level.as_str(), lines.as_str(), "", "ENTER  NEW GAME"],
                )
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_field(&self, fb: &mut FrameBuffer, f: Frame, state: &GameState) {
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for (y, row) in state.field().rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(color) => ('█', CellStyle::new(Rgb::from(*color), PLAY_BG)),
                    None => ('·', empty),
                };
                self.fill_cell(fb, f, x as i16, y as i16, ch, style);
            }
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, f: Frame, piece: &Piece, ch: char, style: CellStyle) {
        for (x, y) in piece.cells() {
            self.fill_cell(fb, f, x, y, ch, style);
        }
    }

    /// Paint one field cell. Cells outside the field (above the top) are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: i16, y: i16, ch: char, style: CellStyle) {
        if !(0..FIELD_WIDTH as i16).contains(&x) || !(0..FIELD_HEIGHT as i16).contains(&y) {
            return;
        }
        let px = f.x + 1 + x as u16 * self.cell_w;
        let py = f.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, f: Frame, viewport: Viewport, state: &GameState, hud: &Hud<'_>) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = f.y;
        for (name, number) in [("SCORE", state.score()), ("LEVEL", state.level()), ("LINES", state.lines())] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(next) = state.next() {
            let style = CellStyle::new(Rgb::from(next.color), SCREEN_BG);
            for (sx, sy) in next.shape.filled_cells() {
                let px = panel_x + sx as u16 * self.cell_w;
                fb.fill_rect(px, y + sy as u16, self.cell_w, 1, '█', style);
            }
        }
        y += 5;

        if hud.high_scores.is_empty() {
            return;
        }
        fb.put_str(panel_x, y, "HIGH SCORES", label);
        y += 1;
        for (rank, entry) in hud.high_scores.iter().take(HIGH_SCORE_ROWS).enumerate() {
            if y >= viewport.height {
                break;
            }
            let x = fb.put_u32(panel_x, y, rank as u32 + 1, value.dim());
            let x = fb.put_str(x, y, ". ", value.dim());
            fb.put_u32(x, y, entry.score, value);
            y += 1;
        }
    }

    /// Key legend in the space left of the frame, when there is room for it
    fn draw_controls(&self, fb: &mut FrameBuffer, f: Frame, viewport: Viewport) {
        let Some(x) = f.x.checked_sub(CONTROLS_W + 2) else {
            return;
        };
        if f.y + CONTROLS.len() as u16 + 1 > viewport.height {
            return;
        }

        let label = CellStyle::default().bold();
        let key = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.put_str(x, f.y, "CONTROLS", label);
        for (i, (keys, action)) in CONTROLS.iter().enumerate() {
            let y = f.y + 1 + i as u16;
            fb.put_str(x, y, keys, key);
            fb.put_str(x + CONTROLS_KEY_W, y, action, key.dim());
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let top = (f.y + f.h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let text_w = text.chars().count() as u16;
            let x = f.x + f.w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PieceKind;
    use crate::core::ScriptedGenerator;

    #[test]
    fn ghost_is_drawn_below_active_piece() {
        let state = GameState::started(&mut ScriptedGenerator::repeat(PieceKind::O));
        let fb = GameView::default().render(&state, &Hud::default(), Viewport::new(22, 22));
        // O at x=4: columns 1 + 4*2 = 9 and 10. Active on rows 0-1, ghost on 18-19.
        assert_eq!(fb.get(9, 1).map(|c| c.ch), Some('█'));
        assert_eq!(fb.get(9, 19).map(|c| c.ch), Some('░'));
        assert_eq!(fb.get(9, 20).map(|c| c.ch), Some('░'));
        assert_eq!(fb.get(9, 10).map(|c| c.ch), Some('·'));
    }

    #[test]
    fn start_screen_offers_continue_only_with_a_save() {
        let state = GameState::new();
        let view = GameView::default();
        let vp = Viewport::new(22, 22);

        let plain = view.render(&state, &Hud::default(), vp).to_text();
        assert!(plain.contains("ENTER  NEW GAME"));
        assert!(!plain.contains("CONTINUE"));

        let hud = Hud {
            can_resume: true,
            ..Hud::default()
        };
        assert!(view.render(&state, &hud, vp).to_text().contains("C  CONTINUE"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let state = GameState::started(&mut ScriptedGenerator::repeat(PieceKind::I));
        let fb = GameView::default().render(&state, &Hud::default(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
