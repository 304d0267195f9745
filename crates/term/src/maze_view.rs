//! MazeView: maps a rendered maze into a terminal framebuffer.
//!
//! This module is pure (no I/O). It draws the color swatch channel of each
//! display token as a solid block, so the screen looks like a grid of colored
//! tiles rather than text.

use crate::core::{render, MazeEngine, RenderFrame};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PlayState;

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

/// Session facts shown under the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub moves: u32,
    pub state: PlayState,
}

impl StatusView {
    pub fn of(engine: &MazeEngine) -> Self {
        Self {
            moves: engine.moves(),
            state: engine.state(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Lays out the maze frame, its border and the status line.
pub struct MazeView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    /// Maze cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for MazeView {
    fn default() -> Self {
        // 2x1 keeps tiles roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

impl MazeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Size of the bordered maze frame in terminal cells.
    pub fn frame_size(&self, frame: &RenderFrame) -> (u16, u16) {
        let cols = u16::try_from(frame.cols()).unwrap_or(u16::MAX);
        let rows = u16::try_from(frame.rows()).unwrap_or(u16::MAX);
        (
            cols.saturating_mul(self.cell_w).saturating_add(2),
            rows.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Draw `frame` and `status` into `fb`, resizing it to the viewport.
    ///
    /// Anything that does not fit in the viewport is clipped.
    pub fn render_into(
        &self,
        frame: &RenderFrame,
        status: StatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(frame);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // One extra row for the status line.
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h.saturating_add(1)) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (pos, token) in frame.iter() {
            let (Ok(col), Ok(row)) = (u16::try_from(pos.col), u16::try_from(pos.row)) else {
                continue;
            };
            let px = start_x.saturating_add(col.saturating_mul(self.cell_w).saturating_add(1));
            let py = start_y.saturating_add(row.saturating_mul(self.cell_h).saturating_add(1));
            fb.fill_rect(
                px,
                py,
                self.cell_w,
                self.cell_h,
                ' ',
                CellStyle::swatch(token.swatch()),
            );
        }

        self.draw_status(fb, status, start_x, start_y.saturating_add(frame_h));

        match status.state {
            PlayState::Playing => {}
            PlayState::Solved => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "SOLVED"),
            PlayState::DeclaredUnsolvable => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "UNSOLVABLE")
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &RenderFrame, status: StatusView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, status, viewport, &mut fb);
        fb
    }

    /// Project the engine and draw it.
    pub fn render_engine(&self, engine: &MazeEngine, viewport: Viewport) -> FrameBuffer {
        self.render(&render(engine), StatusView::of(engine), viewport)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(right, y, '┐', BORDER);
        fb.put_char(x, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', BORDER);
            fb.put_char(x.saturating_add(dx), bottom, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', BORDER);
            fb.put_char(right, y.saturating_add(dy), '│', BORDER);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, status: StatusView, x: u16, y: u16) {
        let label = LABEL.bold();
        let cx = fb.put_str(x, y, "MOVES ", label);
        let cx = fb.put_str(cx, y, &status.moves.to_string(), LABEL);
        let hint = match status.state {
            PlayState::Playing => "  arrows/wasd move, q quits",
            PlayState::Solved | PlayState::DeclaredUnsolvable => "  press any key",
        };
        fb.put_str(cx, y, hint, LABEL);
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
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
