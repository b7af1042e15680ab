//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: views paint snapshots into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes only what changed.
//! No ratatui widgets or layout; cells are placed directly so the blocks
//! well can be drawn two columns per cell.

pub mod blocks_view;
pub mod fb;
pub mod jumper_view;
pub mod renderer;
pub mod throttle;

pub use tui_arcade_core as core;
pub use tui_arcade_jumper as jumper;
pub use tui_arcade_types as types;

pub use blocks_view::{AnchorY, BlocksView};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use jumper_view::JumperView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::{fingerprint, RenderThrottle};

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
