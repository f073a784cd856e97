//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::EndReason;

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const BODY: Rgb = Rgb::new(0, 0, 255);
const HEAD: Rgb = Rgb::new(0, 100, 255);
const FOOD: Rgb = Rgb::new(200, 0, 0);
const TEXT: Rgb = Rgb::new(255, 255, 255);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left corner and size of the bordered board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show the whole board including the border.
    ///
    /// Boards wider or taller than a terminal can address clamp to `u16::MAX`.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let (cols, rows) = snap.grid_size();
        (
            clamp_u16(u64::from(cols) * u64::from(self.cell_w) + 2),
            clamp_u16(u64::from(rows) * u64::from(self.cell_h) + 2),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let bg = CellStyle::new(BACKGROUND, BACKGROUND);
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            bg,
        );

        let border = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
        self.draw_border(fb, frame, border);

        // Score in the upper left, over the top border.
        let text = CellStyle::new(TEXT, BACKGROUND).bold();
        let used = fb.put_str(frame.x + 2, frame.y, " Score: ", text);
        let used = used + fb.put_u32(frame.x + 2 + used, frame.y, snap.score, text);
        fb.put_char(frame.x + 2 + used, frame.y, ' ', text);

        if let Some(food) = snap.food.and_then(|c| snap.grid_pos(c)) {
            self.fill_board_cell(fb, frame, food, '█', CellStyle::new(FOOD, BACKGROUND));
        }

        // Tail first so the head is drawn last and stays visible on overlap.
        let body = CellStyle::new(BODY, BACKGROUND);
        let head = CellStyle::new(HEAD, BACKGROUND).bold();
        for (i, seg) in snap.segments.iter().enumerate().rev() {
            let Some(pos) = snap.grid_pos(*seg) else {
                continue;
            };
            if i == 0 {
                self.fill_board_cell(fb, frame, pos, '█', head);
            } else {
                self.fill_board_cell(fb, frame, pos, '▓', body);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            let msg = match snap.end {
                Some(EndReason::BoardFilled) => "BOARD CLEARED",
                _ => "GAME OVER",
            };
            self.draw_overlay_text(fb, frame, msg);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

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

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        (col, row): (u32, u32),
        ch: char,
        style: CellStyle,
    ) {
        let px = u64::from(frame.x) + 1 + u64::from(col) * u64::from(self.cell_w);
        let py = u64::from(frame.y) + 1 + u64::from(row) * u64::from(self.cell_h);
        // Cells past the addressable terminal area are not drawn.
        let (Ok(px), Ok(py)) = (u16::try_from(px), u16::try_from(py)) else {
            return;
        };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LENGTH", snap.segments.len() as u32),
            ("STEPS", snap.steps),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(TEXT, BACKGROUND).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn clamp_u16(v: u64) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
