//! Board module - the fixed-size playfield
//!
//! 12 columns x 20 rows stored as a flat row-major array, so the board never
//! allocates and its dimensions cannot change after creation.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Number of rows, as a capacity for per-sweep results
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one sweep, bottom row first
pub type ClearedRows = ArrayVec<usize, BOARD_ROWS>;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Row-major cells (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), or `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(Option::is_some))
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(Option::is_none))
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_ROWS {
            return None;
        }
        let width = BOARD_WIDTH as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Whether any filled cell of `piece` is out of bounds or lands on an occupied cell
    ///
    /// Stops at the first violation.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y)| !self.is_valid(x, y))
    }

    /// Write the piece's filled cells into the board using its kind as the value
    ///
    /// Callers lock only pieces that passed the collision check, so nothing is
    /// validated here; cells outside the board are skipped.
    pub fn merge(&mut self, piece: &Piece) {
        let kind = piece.kind;
        for (x, y) in piece.cells() {
            self.set(x, y, Some(kind));
        }
    }

    /// Remove every full row, shifting the rows above down and refilling the top with empty rows
    ///
    /// Rows are scanned bottom to top with a read and a write cursor, which
    /// is the same as splicing a full row out and re-checking the index that
    /// the row above slid into. The returned indices refer to the board as it
    /// was before the sweep, bottom row first.
    pub fn sweep_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_ROWS;

        for read_y in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Whether no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with `kind`, leaving the listed columns empty
    pub fn fill_row_except(&mut self, y: i8, kind: PieceKind, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(kind) };
            self.set(x, y, cell);
        }
    }

    /// Export as a grid of piece identifiers (0 = empty)
    pub fn write_id_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = self.cells[y * width + x].map_or(0, PieceKind::id);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
