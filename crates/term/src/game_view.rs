//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::engine::{Message, MessageKind};
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::types::{Pos, TileValue, GRID_SIZE};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const HINT_BG: Rgb = Rgb::new(40, 70, 45);
/// Columns reserved right of the grid for the side panel.
const PANEL_W: u16 = 20;

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

/// Front-end state that is not part of the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub cursor: Option<Pos>,
    pub message: Option<&'a Message>,
}

/// Tile color band by value.
pub fn tile_color(value: TileValue) -> Rgb {
    match value {
        0..=4 => Rgb::new(70, 130, 220),
        5..=8 => Rgb::new(240, 150, 50),
        9..=12 => Rgb::new(235, 110, 170),
        13..=20 => Rgb::new(150, 90, 210),
        _ => Rgb::new(215, 60, 60),
    }
}

/// A lightweight terminal renderer for the puzzle.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide enough for a two digit value plus cursor brackets.
        Self { cell_w: 6, cell_h: 3 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(4),
            cell_h: cell_h.max(1),
        }
    }

    /// Frame size of the grid including its border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 2,
            GRID_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Allocation-free: reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, hud: Hud<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let frame = Rect::new(
            viewport.width.saturating_sub(frame_w + PANEL_W) / 2,
            viewport.height.saturating_sub(frame_h + 3) / 2 + 1,
            frame_w,
            frame_h,
        );

        let title = CellStyle::new(Rgb::new(255, 210, 90), PANEL_BG).bold();
        fb.put_str_centered(frame.x, frame.y.saturating_sub(1), frame.w, "JUST DIVIDE", title);

        fb.fill(frame.inset(1), ' ', CellStyle::solid(BOARD_BG));
        fb.draw_box(frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let cell = self.cell_rect(frame, Pos::new(row, col));
                match snap.board[row][col] {
                    Some(value) => draw_tile(fb, cell, value),
                    None => draw_empty(fb, cell, snap.hints[row][col]),
                }
            }
        }

        if let Some(cursor) = hud.cursor.filter(|p| p.in_bounds() && !snap.game_over) {
            let cell = self.cell_rect(frame, cursor);
            let style = CellStyle::new(Rgb::new(255, 255, 120), BOARD_BG).bold();
            for y in cell.y..cell.bottom() {
                fb.put_char(cell.x, y, '[', style);
                fb.put_char(cell.right() - 1, y, ']', style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame.right() + 2, frame.y);

        if let Some(msg) = hud.message {
            let color = match msg.kind {
                MessageKind::Info => Rgb::new(200, 200, 200),
                MessageKind::Success => Rgb::new(120, 220, 130),
                MessageKind::Error => Rgb::new(240, 90, 90),
            };
            fb.put_str(frame.x, frame.bottom() + 1, &msg.text, CellStyle::new(color, PANEL_BG));
        }

        if snap.game_over {
            let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
            fb.put_str_centered(frame.x, frame.mid_y(), frame.w, "GAME OVER", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Screen area of grid cell `pos` inside `frame`.
    fn cell_rect(&self, frame: Rect, pos: Pos) -> Rect {
        Rect::new(
            frame.x + 1 + pos.col as u16 * self.cell_w,
            frame.y + 1 + pos.row as u16 * self.cell_h,
            self.cell_w,
            self.cell_h,
        )
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, panel_x: u16, start_y: u16) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }
        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("BEST", snap.best_score),
            ("LEVEL", snap.level),
            ("TRASH", snap.trash_uses),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x + 7, y, n, value);
            y += 1;
        }

        y += 1;
        fb.put_str(panel_x, y, "KEEP", label);
        self.put_slot(fb, panel_x + 7, y, snap.keep, true);
        y += 1;
        fb.put_str(panel_x, y, "NEXT", label);
        self.put_slot(fb, panel_x + 7, y, snap.head, true);
        let mut x = panel_x + 11;
        for next in snap.preview {
            self.put_slot(fb, x, y, next, false);
            x += 4;
        }

        y += 2;
        fb.put_str(panel_x, y, "TIME", label);
        put_clock(fb, panel_x + 7, y, snap.elapsed_seconds, value);
        y += 1;
        fb.put_str(panel_x, y, "MODE", label);
        fb.put_str(panel_x + 7, y, snap.difficulty.as_str(), value);
        y += 1;
        fb.put_str(panel_x, y, "HINTS", label);
        fb.put_str(panel_x + 7, y, if snap.hints_on { "on" } else { "off" }, value);
    }

    fn put_slot(&self, fb: &mut FrameBuffer, x: u16, y: u16, slot: Option<TileValue>, bold: bool) {
        match slot {
            Some(v) => {
                let mut style = CellStyle::new(tile_color(v), PANEL_BG);
                style.bold = bold;
                style.dim = !bold;
                fb.put_u32(x, y, v, style);
            }
            None => fb.put_char(x, y, '-', CellStyle::new(Rgb::new(120, 120, 120), PANEL_BG)),
        }
    }
}

/// Tile body inset one column so neighbours stay visually separate.
fn draw_tile(fb: &mut FrameBuffer, cell: Rect, value: TileValue) {
    let body = Rect::new(cell.x + 1, cell.y, cell.w - 2, cell.h);
    let bg = tile_color(value);
    fb.fill(body, ' ', CellStyle::solid(bg));
    let mut digits = [0u8; 10];
    let text = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();
    fb.put_str_centered(body.x, body.mid_y(), body.w, format_value(value, &mut digits), text);
}

fn draw_empty(fb: &mut FrameBuffer, cell: Rect, hinted: bool) {
    let body = Rect::new(cell.x + 1, cell.y, cell.w - 2, cell.h);
    if hinted {
        fb.fill(body, ' ', CellStyle::solid(HINT_BG));
        let mark = CellStyle::new(Rgb::new(140, 240, 150), HINT_BG).bold();
        fb.put_str_centered(body.x, body.mid_y(), body.w, "+", mark);
    } else {
        let dot = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        fb.put_str_centered(body.x, body.mid_y(), body.w, "·", dot);
    }
}

/// `MM:SS`, written in place so redraws stay allocation-free.
fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, seconds: u32, style: CellStyle) {
    let mut x = x;
    for (i, part) in [seconds / 60, seconds % 60].into_iter().enumerate() {
        if i > 0 {
            fb.put_char(x, y, ':', style);
            x += 1;
        }
        if part < 10 {
            fb.put_char(x, y, '0', style);
            x += 1;
        }
        x += fb.put_u32(x, y, part, style);
    }
}

fn format_value(value: TileValue, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut i = buf.len();
    loop {
        i -= 1;
        buf[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[i..]).unwrap_or("?")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(fb: &FrameBuffer) -> String {
        let mut s = String::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                s.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn color_bands() {
        assert_eq!(tile_color(4), tile_color(2));
        assert_ne!(tile_color(4), tile_color(5));
        assert_eq!(tile_color(8), tile_color(6));
        assert_eq!(tile_color(12), tile_color(9));
        assert_eq!(tile_color(20), tile_color(13));
        assert_eq!(tile_color(35), tile_color(21));
        assert_ne!(tile_color(20), tile_color(21));
    }

    #[test]
    fn clock_pads_minutes_and_seconds() {
        let mut fb = FrameBuffer::new(8, 1);
        put_clock(&mut fb, 0, 0, 125, CellStyle::default());
        let row: String = (0..8).filter_map(|x| fb.get(x, 0)).map(|c| c.ch).collect();
        assert_eq!(row, "02:05   ");
    }

    #[test]
    fn format_value_digits() {
        let mut buf = [0u8; 10];
        assert_eq!(format_value(0, &mut buf), "0");
        assert_eq!(format_value(35, &mut buf), "35");
    }

    #[test]
    fn renders_tiles_and_panel() {
        let mut snap = GameSnapshot::default();
        snap.board[1][2] = Some(18);
        snap.score = 42;
        snap.head = Some(7);
        let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(60, 20));
        let out = text(&fb);
        assert!(out.contains("JUST DIVIDE"));
        assert!(out.contains("18"));
        assert!(out.contains("SCORE  42"));
        assert!(out.contains("TIME   00:00"));
        assert!(!out.contains("GAME OVER"));
    }

    #[test]
    fn renders_overlay_message_and_cursor() {
        let mut snap = GameSnapshot::default();
        snap.game_over = true;
        let msg = Message::error("Game Over! No more valid merges.");
        let hud = Hud {
            cursor: Some(Pos::new(0, 0)),
            message: Some(&msg),
        };
        let fb = GameView::default().render(&snap, hud, Viewport::new(60, 20));
        let out = text(&fb);
        assert!(out.contains("GAME OVER"));
        assert!(out.contains("No more valid merges"));
        // Cursor is hidden once the game is over.
        assert!(!out.contains('['));
    }

    #[test]
    fn hint_cells_are_marked() {
        let mut snap = GameSnapshot::default();
        snap.hints[3][3] = true;
        let hud = Hud {
            cursor: Some(Pos::new(2, 1)),
            message: None,
        };
        let fb = GameView::default().render(&snap, hud, Viewport::new(60, 20));
        let out = text(&fb);
        assert_eq!(out.matches('+').count(), 1);
        assert!(out.contains('['));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Hud::default(), Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
    }
}
