//! StageView: maps a [`StageSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::StageSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Coordinate;

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const EMPTY: CellStyle = CellStyle::fg(Rgb::new(90, 90, 100)).on(PLAY_BG).dim();
const SETTLED: CellStyle = CellStyle::fg(Rgb::new(120, 160, 220)).on(PLAY_BG);
const ACTIVE: CellStyle = CellStyle::fg(Rgb::new(250, 210, 90)).on(PLAY_BG).bold();
const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const OVERLAY: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();

const BLOCK: char = '█';
const DOT: char = '·';
const PANEL_MIN_WIDTH: u16 = 10;

/// Draws the stage as a bordered grid with a score line below it.
pub struct StageView {
    /// Stage cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for StageView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square in most fonts.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the frame landed inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl StageView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Frame position for a stage of `snap`'s size in `viewport`.
    ///
    /// The frame is the stage plus a one-cell border; one extra row below it
    /// holds the score line.
    pub fn frame_rect(&self, snap: &StageSnapshot, viewport: Viewport) -> FrameRect {
        let w = clamp_u16(snap.width)
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let h = clamp_u16(snap.height).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h.saturating_add(1)) / 2,
            AnchorY::Top => 0,
        };
        FrameRect { x, y, w, h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &StageSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let frame = self.frame_rect(snap, viewport);
        fb.put_box(frame.x, frame.y, frame.w, frame.h, BORDER);

        for y in 0..snap.height {
            for x in 0..snap.width {
                self.draw_cell(fb, frame, Coordinate::new(x, y), DOT, EMPTY);
            }
        }
        for cell in snap.settled.iter().copied().filter(|&c| snap.in_stage(c)) {
            self.draw_cell(fb, frame, cell, BLOCK, SETTLED);
        }
        for cell in snap.active.iter().flatten().copied() {
            if snap.in_stage(cell) {
                self.draw_cell(fb, frame, cell, BLOCK, ACTIVE);
            }
        }

        let score_y = frame.y.saturating_add(frame.h);
        fb.put_str(frame.x, score_y, &format!("score: {}", snap.score), VALUE);

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.finished {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &StageSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// `cell` must be inside the stage.
    fn draw_cell(&self, fb: &mut FrameBuffer, f: FrameRect, cell: Coordinate, ch: char, style: CellStyle) {
        let px = f
            .x
            .saturating_add(1)
            .saturating_add((cell.x as u16).saturating_mul(self.cell_w));
        let py = f.y.saturating_add(1).saturating_add(cell.y as u16);
        fb.put_run(px, py, self.cell_w, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &StageSnapshot,
        viewport: Viewport,
        f: FrameRect,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let mut y = f.y;
        for (label, value) in [
            ("SCORE", snap.score),
            ("PIECES", snap.pieces_spawned),
            ("ROWS", snap.rows_cleared),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_str(panel_x, y.saturating_add(1), &value.to_string(), VALUE);
            y = y.saturating_add(3);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, f: FrameRect, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        let y = f.y.saturating_add(f.h / 2);
        fb.put_str(x, y, text, OVERLAY);
    }
}

fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(width: i32, height: i32) -> StageSnapshot {
        StageSnapshot {
            width,
            height,
            ..StageSnapshot::default()
        }
    }

    #[test]
    fn frame_is_centered_horizontally() {
        let view = StageView::default();
        let f = view.frame_rect(&snap(10, 20), Viewport::new(40, 23));
        assert_eq!((f.w, f.h), (22, 22));
        assert_eq!(f.x, 9);
        assert_eq!(f.y, 0);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = StageView::default();
        let mut s = snap(10, 20);
        s.finished = true;
        let fb = view.render(&s, Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
