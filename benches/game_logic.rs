use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_arcade::core::{rotate_shape, shape_for, BlocksGame, Board, GameSnapshot};
use tui_arcade::jumper::{JumperGame, JumperInput};
use tui_arcade::types::{PieceKind, RotateDir, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut game = BlocksGame::new(12345);
    game.start();

    c.bench_function("blocks_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(TICK_MS));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row_except(y, PieceKind::I, &[]);
            }
            black_box(board.sweep_lines());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = shape_for(PieceKind::I);
    c.bench_function("rotate_shape", |b| {
        b.iter(|| rotate_shape(black_box(shape), RotateDir::Cw))
    });

    let mut game = BlocksGame::new(12345);
    game.start();
    c.bench_function("rotate_with_kicks", |b| {
        b.iter(|| {
            game.rotate(black_box(RotateDir::Cw));
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut game = BlocksGame::new(12345);
    c.bench_function("spawn_piece", |b| b.iter(|| black_box(game.spawn_piece())));
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = BlocksGame::new(12345);
    game.start();
    let mut snap = GameSnapshot::default();
    c.bench_function("snapshot_into", |b| b.iter(|| game.snapshot_into(&mut snap)));
}

fn bench_jumper_update(c: &mut Criterion) {
    let mut game = JumperGame::new(12345);
    game.start();
    let input = JumperInput::default();
    c.bench_function("jumper_update_16ms", |b| {
        b.iter(|| {
            game.update(black_box(TICK_MS as f32 / 1000.0), input);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_sweep,
    bench_rotate,
    bench_spawn,
    bench_snapshot,
    bench_jumper_update
);
criterion_main!(benches);
