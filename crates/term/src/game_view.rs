//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::GameStatus;

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

const BOARD_BG: Rgb = Rgb::new(60, 56, 52);
const EMPTY_BG: Rgb = Rgb::new(90, 84, 78);
const DARK_TEXT: Rgb = Rgb::new(60, 56, 52);
const LIGHT_TEXT: Rgb = Rgb::new(250, 246, 242);

/// Renders a 2048 board with a score panel.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for four digits and keeps tiles roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
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

    /// Outer size of the bordered board for a grid of `size` cells per side.
    pub fn board_extent(&self, size: u8) -> (u16, u16) {
        let n = size as u16;
        let inner_w = n * (self.cell_w + 1) + 1;
        let inner_h = n * (self.cell_h + 1) + 1;
        (inner_w + 2, inner_h + 2)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.board_extent(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let board_style = CellStyle::new(LIGHT_TEXT, BOARD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board_style);
        draw_border(fb, start_x, start_y, frame_w, frame_h, CellStyle::default());

        for y in 0..snap.size {
            for x in 0..snap.size {
                self.draw_tile(fb, start_x, start_y, x, y, snap.value_at(x, y));
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        match snap.status {
            GameStatus::Active => {}
            GameStatus::Won => draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!"),
            GameStatus::Lost => draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u8, y: u8, value: u32) {
        let px = start_x + 2 + x as u16 * (self.cell_w + 1);
        let py = start_y + 2 + y as u16 * (self.cell_h + 1);
        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        if value == 0 {
            return;
        }

        let digits = digit_count(value);
        let tx = px + self.cell_w.saturating_sub(digits) / 2;
        fb.put_u32(tx, py + self.cell_h / 2, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST TILE", snap.max_tile),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(3);
        }

        for hint in ["arrows/hjkl/wasd", "r  restart", "q  quit"] {
            fb.put_str(panel_x, y, hint, value);
            y = y.saturating_add(1);
        }
    }
}

const PANEL_W: u16 = 18;

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let mid = y.saturating_add(h / 2);
    let banner_w = (text.chars().count() as u16 + 4).min(w);
    let banner_x = x.saturating_add(w.saturating_sub(banner_w) / 2);
    fb.fill_rect(banner_x, mid.saturating_sub(1), banner_w, 3, ' ', style);
    fb.put_str_centered(x, mid, w, text, style);

    let hint = "press r to restart";
    if h > 4 {
        fb.put_str_centered(x, mid + 2, w, hint, CellStyle::default());
    }
}

/// Background per tile value, warming up as values grow.
fn tile_style(value: u32) -> CellStyle {
    let (bg, fg) = match value {
        0 => (EMPTY_BG, DARK_TEXT),
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}

fn digit_count(mut value: u32) -> u16 {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(8), 1);
        assert_eq!(digit_count(64), 2);
        assert_eq!(digit_count(2048), 4);
        assert_eq!(digit_count(131072), 6);
    }

    #[test]
    fn test_board_extent_grows_with_size() {
        let view = GameView::default();
        assert_eq!(view.board_extent(4), (35, 19));
        assert_eq!(view.board_extent(1), (11, 7));
    }

    #[test]
    fn test_empty_and_filled_tiles_differ() {
        assert_ne!(tile_style(0), tile_style(2));
        assert_eq!(tile_style(4096), tile_style(8192));
    }
}
