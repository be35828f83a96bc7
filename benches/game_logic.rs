use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_mini::core::{GameState, Grid, Piece};
use tetris_mini::types::{FrameInput, Variant};

fn bench_frame(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_frame_16ms", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::new(12345);
            }
            state.frame(black_box(16), &FrameInput::default());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                grid.fill_row(y, Variant::I);
            }
            grid.clear_full_rows();
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    c.bench_function("spawn_piece", |b| {
        b.iter(|| Piece::spawn(black_box(Variant::T)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let grid = Grid::new();
    let mut piece = Piece::spawn(Variant::T);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !piece.try_move(1, &grid) {
                piece = Piece::spawn(Variant::T);
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let grid = Grid::new();
    let mut piece = Piece::spawn(Variant::T);
    piece.try_move(3, &grid);
    for _ in 0..5 {
        piece.try_fall(&grid);
    }

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            piece.try_rotate(&grid);
        })
    });
}

criterion_group!(
    benches,
    bench_frame,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
