//! Blocks core - pure, deterministic falling-block game logic
//!
//! This crate holds the board engine and nothing else: no terminal, no
//! clock, no input devices. Hosts own a [`BlocksGame`], feed it commands and
//! elapsed time, and read it back through [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: 12x20 grid with collision checks, merging and line sweeps
//! - [`pieces`]: shape matrices, the seven-piece catalog and pure rotation
//! - [`rng`]: seeded LCG shared with the jumper for platform spawning
//! - [`game`]: the engine state machine (falling, lock, game over)
//! - [`snapshot`]: copyable, serializable view for renderers
//!
//! # Rules
//!
//! - Pieces are drawn uniformly from the 7 shapes, no bag
//! - Gravity moves the piece down once the drop timer exceeds 1000ms
//! - A piece that cannot move down locks immediately (no lock delay)
//! - 10 points per lock, 100 points per cleared row
//! - A spawned piece that has no room ends the game; by default the board is
//!   wiped and play continues at score 0
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::BlocksGame;
//! use tui_arcade_types::BlocksAction;
//!
//! let mut game = BlocksGame::new(12345);
//! game.start();
//!
//! game.apply_action(BlocksAction::MoveRight);
//! game.apply_action(BlocksAction::RotateCw);
//! game.apply_action(BlocksAction::HardDrop);
//!
//! assert!(game.score() > 0); // every lock scores
//! ```

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tui_arcade_types as types;

pub use board::{Board, ClearedRows};
pub use game::{BlocksGame, GameOverEvent, LockEvent, OverflowPolicy, Phase};
pub use pieces::{horizontal_kicks, rotate_shape, shape_for, Piece, Shape};
pub use rng::SimpleRng;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
