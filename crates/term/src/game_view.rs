//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, occupied_cells, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, ShapeMatrix, BOARD_HEIGHT, BOARD_WIDTH, COLOR_LOOKUP};

const PLAY_BG: Rgb = Rgb::new(17, 17, 17);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Top-left corner of the board frame inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(PANEL_BG, PANEL_BG).cell(' '));

        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &id) in row.iter().enumerate() {
                if id == 0 {
                    self.draw_empty_cell(fb, frame, x as u16, y as u16);
                } else {
                    self.draw_block(fb, frame, x as i16, y as i16, color_for(id));
                }
            }
        }

        // The active piece is hidden once the game is over.
        if let Some(active) = snap.active.filter(|_| !snap.game_over) {
            for (dx, dy) in occupied_cells(&active.matrix) {
                self.draw_block(
                    fb,
                    frame,
                    active.x as i16 + dx as i16,
                    active.y as i16 + dy as i16,
                    active.color(),
                );
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::new(Rgb::new(80, 80, 80), PANEL_BG);
        let Frame { x, y, w, h } = frame;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(60, 60, 60), PLAY_BG);
        self.fill_cell(fb, frame, x, y, '·', style);
    }

    /// Draw one occupied cell; cells outside the grid (above row 0) are clipped.
    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i16, y: i16, color: Rgb) {
        if x < 0 || x >= BOARD_WIDTH as i16 || y < 0 || y >= BOARD_HEIGHT as i16 {
            return;
        }
        let style = CellStyle::new(color, PLAY_BG).bold();
        self.fill_cell(fb, frame, x as u16, y as u16, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, snap.lines, value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x + 5, y, snap.next.as_str(), value);
        self.draw_preview(fb, panel_x, y + 1, snap.next);
        y += 4;

        let help = CellStyle::new(Rgb::new(120, 120, 120), PANEL_BG);
        for line in ["←/→ move  ↓ down", "↑ rotate  ␣ drop", "p pause  r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y += 1;
        }
    }

    /// Spawn orientation of the next shape; catalog shapes only use matrix rows 0-1.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: ShapeKind) {
        let matrix: ShapeMatrix = get_shape(kind).matrix;
        let style = CellStyle::new(kind.color(), PANEL_BG);
        for (dx, dy) in occupied_cells(&matrix) {
            fb.fill_rect(x + dx as u16 * 2, y + dy as u16, 2, 1, '█', style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y + frame.h / 2;
        let text_w = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn color_for(id: u8) -> Rgb {
    COLOR_LOOKUP.get(id as usize).copied().unwrap_or(COLOR_LOOKUP[0])
}
