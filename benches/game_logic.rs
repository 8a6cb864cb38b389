use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{BoardSnapshot, GameState, Grid, RandomShapes, ShapeCatalog};
use blockfall::term::{GameView, Viewport};
use blockfall::types::Command;

fn bench_down(c: &mut Criterion) {
    let mut state = GameState::standard(Some(12345));

    c.bench_function("apply_down", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::standard(Some(12345));
            }
            state.apply(black_box(Command::Down));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 20);
            for row in 16..20 {
                for col in 0..10 {
                    grid.set(row, col, true);
                }
            }
            grid.clear_full_rows()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::standard(Some(12345));

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_piece();
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut state = GameState::standard(Some(12345));
    let mut left = true;

    c.bench_function("apply_shift", |b| {
        b.iter(|| {
            let command = if left { Command::Left } else { Command::Right };
            left = !left;
            state.apply(black_box(command));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(10, 20, ShapeCatalog::standard(), RandomShapes::seeded(7))
        .unwrap_or_default();

    c.bench_function("apply_rotate", |b| {
        b.iter(|| {
            state.apply(black_box(Command::Rotate));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::standard(Some(12345));
    let mut snap = BoardSnapshot::default();
    state.snapshot_into(&mut snap);
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(80, 24));

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_down,
    bench_line_clear,
    bench_piece_spawn,
    bench_shift,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
