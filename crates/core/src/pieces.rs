//! Pieces module - shape matrices, the seven-piece catalog and rotation
//!
//! A shape is a small square matrix (side 2, 3 or 4) of filled/empty cells.
//! Shapes are `Copy` values: the catalog returns a fresh matrix on every
//! call and rotation builds a new one, so no two pieces ever share storage.

use crate::types::{PieceKind, RotateDir, BOARD_WIDTH};

/// Largest matrix side in the catalog (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a filled cell relative to the piece origin, `(dx, dy)`
pub type CellOffset = (i8, i8);

/// Square 0/1 matrix describing a piece's footprint
///
/// Only the top-left `size x size` block is meaningful; the rest stays zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Shape {
    size: u8,
    rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from its matrix; any non-zero entry counts as filled
    ///
    /// Entries outside the `size x size` block are dropped.
    pub const fn new(size: u8, rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut out = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let n = if size as usize > MAX_SHAPE_SIZE {
            MAX_SHAPE_SIZE
        } else {
            size as usize
        };
        let mut y = 0;
        while y < n {
            let mut x = 0;
            while x < n {
                out[y][x] = if rows[y][x] != 0 { 1 } else { 0 };
                x += 1;
            }
            y += 1;
        }
        Self {
            size: n as u8,
            rows: out,
        }
    }

    /// Matrix side length (also the piece's column width)
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_filled(&self, dx: usize, dy: usize) -> bool {
        dx < self.size as usize && dy < self.size as usize && self.rows[dy][dx] != 0
    }

    /// Filled cells in row-major order
    pub fn filled_cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |dy| {
            (0..n)
                .filter(move |&dx| self.rows[dy][dx] != 0)
                .map(move |dx| (dx as i8, dy as i8))
        })
    }

    pub fn rows(&self) -> &[[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE] {
        &self.rows
    }
}

/// Rotate a shape a quarter turn
///
/// The matrix is transposed, then each row is reversed (clockwise) or the
/// row order is reversed (counter-clockwise). The input is left untouched.
pub fn rotate_shape(shape: Shape, dir: RotateDir) -> Shape {
    let n = shape.size as usize;
    let mut rows = shape.rows;

    for y in 0..n {
        for x in 0..y {
            let tmp = rows[y][x];
            rows[y][x] = rows[x][y];
            rows[x][y] = tmp;
        }
    }

    match dir {
        RotateDir::Cw => {
            for row in rows.iter_mut().take(n) {
                row[..n].reverse();
            }
        }
        RotateDir::Ccw => rows[..n].reverse(),
    }

    Shape {
        size: shape.size,
        rows,
    }
}

/// Spawn-orientation matrix for a piece kind
pub fn shape_for(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => Shape::new(3, [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0; 4]]),
        PieceKind::O => Shape::new(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
        PieceKind::L => Shape::new(3, [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0; 4]]),
        PieceKind::J => Shape::new(3, [[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0; 4]]),
        PieceKind::I => Shape::new(4, [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
        PieceKind::S => Shape::new(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
        PieceKind::Z => Shape::new(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]),
    }
}

/// Column where a shape of the given side spawns, centred on the board
pub fn spawn_column(size: u8) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (size / 2) as i8
}

/// Horizontal offsets tried after a blocked rotation: +1, -1, +2, -2, ... up to ±`width`
pub fn horizontal_kicks(width: u8) -> impl Iterator<Item = i8> {
    (1..=width as i8).flat_map(|k| [k, -k])
}

/// A piece on the board: kind, current matrix and top-left position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Fresh piece of `kind` at row 0, horizontally centred
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = shape_for(kind);
        Self {
            kind,
            shape,
            x: spawn_column(shape.size()),
            y: 0,
        }
    }

    /// Column width of the current matrix
    pub fn width(&self) -> u8 {
        self.shape.size()
    }

    /// Absolute board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Same piece translated by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its matrix rotated in place (position unchanged)
    pub fn rotated(&self, dir: RotateDir) -> Self {
        Self {
            shape: rotate_shape(self.shape, dir),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(shape_for(kind).filled_cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn t_rotates_clockwise() {
        let t = shape_for(PieceKind::T);
        let cw = rotate_shape(t, RotateDir::Cw);
        let expected = Shape::new(3, [[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0; 4]]);
        assert_eq!(cw, expected);
    }

    #[test]
    fn t_rotates_counter_clockwise() {
        let t = shape_for(PieceKind::T);
        let ccw = rotate_shape(t, RotateDir::Ccw);
        let expected = Shape::new(3, [[0, 1, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0; 4]]);
        assert_eq!(ccw, expected);
    }

    #[test]
    fn rotation_does_not_touch_the_catalog() {
        let before = shape_for(PieceKind::L);
        let _ = rotate_shape(shape_for(PieceKind::L), RotateDir::Cw);
        assert_eq!(shape_for(PieceKind::L), before);
    }

    #[test]
    fn new_masks_entries_outside_size() {
        let s = Shape::new(2, [[1, 1, 1, 1], [1, 1, 1, 1], [1; 4], [1; 4]]);
        assert_eq!(s.filled_cells().count(), 4);
        assert!(!s.is_filled(2, 0));
    }

    #[test]
    fn kicks_alternate_and_grow() {
        let kicks: Vec<i8> = horizontal_kicks(3).collect();
        assert_eq!(kicks, vec![1, -1, 2, -2, 3, -3]);
    }

    #[test]
    fn spawn_is_centred() {
        assert_eq!(Piece::spawn(PieceKind::T).x, 5);
        assert_eq!(Piece::spawn(PieceKind::O).x, 5);
        assert_eq!(Piece::spawn(PieceKind::I).x, 4);
        assert!(PieceKind::ALL.iter().all(|&k| Piece::spawn(k).y == 0));
    }
}
