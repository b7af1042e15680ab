//! Pieces tests - catalog, pure rotation and kick offsets

use tui_arcade::core::{horizontal_kicks, rotate_shape, shape_for, Board, Piece, Shape};
use tui_arcade::types::{PieceKind, RotateDir, BOARD_WIDTH};

fn cells(shape: &Shape) -> Vec<(i8, i8)> {
    let mut v: Vec<_> = shape.filled_cells().collect();
    v.sort();
    v
}

#[test]
fn test_every_piece_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(shape_for(kind).filled_cells().count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_matrix_sizes() {
    assert_eq!(shape_for(PieceKind::O).size(), 2);
    assert_eq!(shape_for(PieceKind::I).size(), 4);
    for kind in [PieceKind::T, PieceKind::L, PieceKind::J, PieceKind::S, PieceKind::Z] {
        assert_eq!(shape_for(kind).size(), 3, "{:?}", kind);
    }
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        for dir in [RotateDir::Cw, RotateDir::Ccw] {
            let start = shape_for(kind);
            let mut shape = start;
            for _ in 0..4 {
                shape = rotate_shape(shape, dir);
            }
            assert_eq!(shape, start, "{:?} {:?}", kind, dir);
        }
    }
}

#[test]
fn test_opposite_rotations_cancel() {
    for kind in PieceKind::ALL {
        let start = shape_for(kind);
        let back = rotate_shape(rotate_shape(start, RotateDir::Cw), RotateDir::Ccw);
        assert_eq!(back, start, "{:?}", kind);
    }
}

#[test]
fn test_rotation_keeps_cell_count_and_size() {
    for kind in PieceKind::ALL {
        let start = shape_for(kind);
        let turned = rotate_shape(start, RotateDir::Cw);
        assert_eq!(turned.size(), start.size());
        assert_eq!(turned.filled_cells().count(), 4);
    }
}

#[test]
fn test_t_rotates_clockwise() {
    // T spawns as the middle row plus a stem below.
    let t = shape_for(PieceKind::T);
    assert_eq!(cells(&t), vec![(0, 1), (1, 1), (1, 2), (2, 1)]);

    let cw = rotate_shape(t, RotateDir::Cw);
    assert_eq!(cells(&cw), vec![(0, 1), (1, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_rotation_does_not_alias_catalog() {
    let mut shape = shape_for(PieceKind::L);
    shape = rotate_shape(shape, RotateDir::Cw);
    assert_ne!(shape, shape_for(PieceKind::L));
    // The catalog still hands out the spawn matrix.
    assert_eq!(cells(&shape_for(PieceKind::L)), vec![(1, 0), (1, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_spawned_pieces_fit_on_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.y, 0);
        assert!(!board.collides(&piece), "{:?} spawns colliding", kind);

        // Roughly centred.
        let xs: Vec<i8> = piece.cells().map(|(x, _)| x).collect();
        let mid = (xs.iter().min().unwrap() + xs.iter().max().unwrap()) as f32 / 2.0;
        assert!((mid - BOARD_WIDTH as f32 / 2.0).abs() <= 1.5, "{:?} at {}", kind, mid);
    }
}

#[test]
fn test_kick_order() {
    let kicks: Vec<i8> = horizontal_kicks(3).collect();
    assert_eq!(kicks, vec![1, -1, 2, -2, 3, -3]);
    assert_eq!(horizontal_kicks(0).count(), 0);
}
