//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`types::BlocksAction`] and
//! [`types::JumperAction`], and tracks held left/right keys for the jumper on
//! terminals that may never send key-release events.

pub mod held;
pub mod map;

pub use tui_arcade_types as types;

pub use held::HeldKeys;
pub use map::{map_blocks_key, map_jumper_key, should_quit};
