//! Terminal frontend.

use anyhow::Result;

use crate::engine::StageSnapshot;
use crate::game_loop::Frontend;
use crate::term::{terminal_viewport, FrameBuffer, StageView, TerminalRenderer};

/// Renders snapshots to the real terminal. Reuses one framebuffer across frames.
pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: StageView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    /// Take over the terminal.
    pub fn enter() -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            view: StageView::default(),
            fb: FrameBuffer::new(0, 0),
        })
    }

    /// Give the terminal back.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Frontend for TerminalScreen {
    fn present(&mut self, snap: &StageSnapshot) -> Result<()> {
        self.view
            .render_into(snap, terminal_viewport(), &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}
