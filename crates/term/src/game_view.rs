//! GameView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{bordered_size, marker_at, Marker};

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

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG);
const SETTLED: CellStyle = CellStyle::new(Rgb::new(80, 120, 220), WELL_BG);
const ACTIVE: CellStyle = CellStyle::new(Rgb::new(240, 220, 80), WELL_BG).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const HINT: CellStyle = CellStyle::new(Rgb::new(130, 130, 130), PANEL_BG);

/// Lays out the bordered board, the side panel and overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensates for tall terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Size of the bordered board in terminal cells
    pub fn frame_size(&self, snap: &BoardSnapshot) -> (u16, u16) {
        let (rows, cols) = bordered_size(snap);
        let cols = u16::try_from(cols).unwrap_or(u16::MAX);
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        (cols.saturating_mul(self.cell_w), rows)
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        // Cells past the viewport edge are never drawn.
        let (rows, cols) = bordered_size(snap);
        let rows = rows.min(usize::from(viewport.height.saturating_sub(start_y)));
        let cols = cols.min(usize::from(viewport.width.saturating_sub(start_x) / self.cell_w));
        for row in 0..rows {
            for col in 0..cols {
                let marker = marker_at(snap, row, col);
                let x = start_x + col as u16 * self.cell_w;
                let y = start_y + row as u16;
                match marker {
                    Marker::Border => fb.fill_run(x, y, self.cell_w, ' ', BORDER),
                    Marker::Settled => fb.fill_run(x, y, self.cell_w, '█', SETTLED),
                    Marker::Active => fb.fill_run(x, y, self.cell_w, '█', ACTIVE),
                    Marker::Empty => {
                        fb.fill_run(x, y, self.cell_w, ' ', EMPTY);
                        fb.put_char(x + self.cell_w / 2, y, '·', EMPTY);
                    }
                }
            }
        }

        // The border ring is drawn as one box over the outer marker cells.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        fb.fill_run(x + 1, y, w - 2, '─', BORDER);
        fb.fill_run(x + 1, y + h - 1, w - 2, '─', BORDER);
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", LABEL);
        for hint in ["←/a  left", "→/d  right", "↓/s  down", "↑/w  rotate", "q    quit"] {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, hint, HINT);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
