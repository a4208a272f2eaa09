//! Terminal rendering for the stage.
//!
//! A small game-oriented rendering layer: [`StageView`] lays a
//! [`crate::engine::StageSnapshot`] out into a [`FrameBuffer`] without any I/O,
//! and [`TerminalRenderer`] flushes framebuffers to the terminal with
//! crossterm, rewriting only what changed.

pub mod fb;
pub mod renderer;
pub mod stage_view;

pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, terminal_viewport, TerminalRenderer};
pub use stage_view::{AnchorY, FrameRect, StageView, Viewport};
