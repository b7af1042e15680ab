//! Jumper core - endless platform-jumper logic
//!
//! Pure game state and physics in a fixed 800x600 world. The host decides
//! when to call [`JumperGame::update`] and with which held keys; this crate
//! never touches a terminal or a clock.
//!
//! # Example
//!
//! ```
//! use tui_arcade_jumper::{JumperGame, JumperInput};
//!
//! let mut game = JumperGame::new(7);
//! game.start();
//! assert!(game.jump());
//! game.update(1.0 / 60.0, JumperInput { left: false, right: true });
//! assert!(game.running());
//! ```

pub mod game;
pub mod world;

pub use game::{JumperGame, JumperOutcome, JumperSnapshot};
pub use tui_arcade_types::JumperInput;
pub use world::{Platform, PlatformKind, Player};
