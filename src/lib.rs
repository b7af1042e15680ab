//! TUI Arcade (workspace facade crate).
//!
//! Re-exports the engine, input and terminal crates under short paths
//! (`tui_arcade::{core,jumper,input,term,types}`) and holds the pieces the
//! two binaries share: environment configuration and log setup.

pub mod config;
pub mod logging;

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_jumper as jumper;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub use config::AppConfig;
