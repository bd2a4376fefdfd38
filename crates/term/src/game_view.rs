//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{rotation_mask, GameSnapshot};
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Cell, SHAPE_FRAME};

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

const BORDER: GlyphStyle = GlyphStyle::fg(Rgb::new(200, 200, 200));
const EMPTY: GlyphStyle = GlyphStyle::fg(Rgb::new(70, 70, 80));
const LABEL: GlyphStyle = GlyphStyle::fg(Rgb::new(255, 255, 255)).bold();
const VALUE: GlyphStyle = GlyphStyle::fg(Rgb::new(220, 220, 220));

/// First frame row used by the spawn masks
const PREVIEW_TOP_ROW: u16 = 2;

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render a snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let frame_w = snap.width as u16 * self.cell_w + 2;
        let frame_h = snap.height as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w + 20) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, snap.color_at(x, y));
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y);

        if snap.game_over() {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Render the title screen shown before the first game.
    pub fn render_title_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let lines = ["CLASSIC TETRIS", "", "Press any key to start", "Q: Quit"];
        let top = viewport.height.saturating_sub(lines.len() as u16) / 2;
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = viewport.width.saturating_sub(text_w) / 2;
            let style = if i == 0 { LABEL } else { VALUE };
            fb.put_str(x, top + i as u16, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, cell: Cell) {
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y;
        match cell {
            Some(color) => fb.fill_rect(px, py, self.cell_w, 1, '█', GlyphStyle::fg(color.into())),
            None => {
                fb.fill_rect(px, py, self.cell_w, 1, ' ', EMPTY);
                fb.put_char(px, py, '·', EMPTY);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel_x: u16, start_y: u16) {
        let mut y = start_y;
        fb.put_str(panel_x, y, "NEXT", LABEL);
        y += 1;

        let style = GlyphStyle::fg(snap.next_kind.color().into());
        for (dx, dy) in rotation_mask(snap.next_kind, 0) {
            // Spawn masks sit in frame rows 2..=3.
            let px = panel_x + dx as u16 * self.cell_w;
            let py = y + (dy as u16).saturating_sub(PREVIEW_TOP_ROW);
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
        y += SHAPE_FRAME as u16 - PREVIEW_TOP_ROW + 1;

        fb.put_str(panel_x, y, "SCORE", LABEL);
        fb.put_u32(panel_x, y + 1, snap.score, VALUE);
        y += 3;

        fb.put_str(panel_x, y, "LEVEL", LABEL);
        fb.put_u32(panel_x, y + 1, snap.level, VALUE);
        y += 3;

        fb.put_str(panel_x, y, "LINES", LABEL);
        fb.put_u32(panel_x, y + 1, snap.lines, VALUE);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let final_score = format!("Final Score: {}", snap.score);
        let lines = ["GAME OVER", final_score.as_str(), "R: Restart", "Q: Quit"];
        let top = start_y + frame_h.saturating_sub(lines.len() as u16 * 2) / 2;

        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            let style = if i == 0 { LABEL } else { VALUE };
            fb.put_str(x, top + i as u16 * 2, text, style);
        }
    }
}
