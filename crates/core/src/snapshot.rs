//! Plain-data copy of a blocks game, for renderers and the JSON state dump.

use serde::{Serialize, Serializer};

use crate::game::Phase;
use crate::pieces::{Piece, Shape};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn kind_letter<S: Serializer>(kind: &PieceKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    #[serde(serialize_with = "kind_letter")]
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// Piece identifiers per cell, 0 = empty
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    #[serde(serialize_with = "kind_letter")]
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub phase: Phase,
    pub started: bool,
    pub paused: bool,
    pub games_over: u32,
    pub seed: u32,
    pub drop_timer_ms: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::T,
            score: 0,
            lines: 0,
            phase: Phase::Falling,
            started: false,
            paused: false,
            games_over: 0,
            seed: 0,
            drop_timer_ms: 0,
        }
    }
}

impl GameSnapshot {
    /// Whether consecutive frames of this snapshot would look the same
    ///
    /// Used by hosts to throttle redraws.
    pub fn is_static(&self) -> bool {
        !self.started || self.paused || self.phase == Phase::GameOver
    }
}
