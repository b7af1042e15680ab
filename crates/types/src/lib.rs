//! Shared types and constants for both arcade games.
//!
//! Everything here is plain data with no dependencies, usable from the game
//! cores, the input mapping and the terminal views alike.
//!
//! # Blocks board
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Blocks timing and scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default host tick (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity step interval |
//! | `LOCK_BONUS` | 10 | Points per locked piece |
//! | `LINE_BONUS` | 100 | Points per cleared row |
//!
//! # Jumper world
//!
//! The jumper uses a fixed logical world of `WORLD_WIDTH` x `WORLD_HEIGHT`
//! units; the terminal view scales it to whatever the viewport offers.
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.id(), 1);
//! assert_eq!(PieceKind::from_id(1), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.as_str(), "T");
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default fixed timestep in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: the active piece is forced down once the drop timer exceeds this
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Flat bonus for every locked piece
pub const LOCK_BONUS: u32 = 10;

/// Bonus per cleared row
pub const LINE_BONUS: u32 = 100;

/// Jumper world width in logical units
pub const WORLD_WIDTH: f32 = 800.0;

/// Jumper world height in logical units
pub const WORLD_HEIGHT: f32 = 600.0;

/// Longest frame the jumper integrates in one step (seconds)
pub const MAX_FRAME_DT: f32 = 0.1;

/// The seven tetromino kinds
///
/// The declaration order fixes the cell identifier returned by [`PieceKind::id`]:
/// T=1, O=2, L=3, J=4, I=5, S=6, Z=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in identifier order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Small positive identifier stored in board snapshots (1..=7)
    pub fn id(self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]; `0` and unknown values map to `None`
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Upper-case letter, as shown in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDir {
    /// Clockwise (+1)
    Cw,
    /// Counter-clockwise (-1)
    Ccw,
}

/// Commands accepted by the blocks engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlocksAction {
    /// Start the game; ignored once a game is running
    Start,
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, locking it if it cannot move
    SoftDrop,
    /// Drop piece until it locks
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause
    Pause,
    /// Start a fresh game (also leaves the halted game-over state)
    Restart,
}

/// Discrete commands accepted by the jumper engine
///
/// Horizontal movement is not a command: it is a held state passed to every
/// update as a [`JumperInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumperAction {
    Jump,
    Start,
}

/// Held horizontal keys for one jumper update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JumperInput {
    pub left: bool,
    pub right: bool,
}

/// A cell on the blocks board: `None` is empty
pub type Cell = Option<PieceKind>;
