use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_maze::core::{load_description, render, render_into, MazeEngine, RenderFrame};
use tui_maze::types::Direction;

/// Open square maze with a wall border, S and E in opposite corners.
fn open_maze(size: usize) -> String {
    let mut text = format!("{} {}\n", size, size);
    for row in 0..size {
        for col in 0..size {
            let edge = row == 0 || col == 0 || row == size - 1 || col == size - 1;
            text.push(match (row, col) {
                (1, 1) => 'S',
                _ if row == size - 2 && col == size - 2 => 'E',
                _ if edge => '#',
                _ => ' ',
            });
        }
        text.push('\n');
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = open_maze(128);
    c.bench_function("parse_128x128", |b| {
        b.iter(|| load_description(black_box(&text)))
    });
}

fn bench_move(c: &mut Criterion) {
    let grid = load_description(&open_maze(64)).unwrap();

    c.bench_function("move_back_and_forth", |b| {
        let mut engine = MazeEngine::new(grid.clone());
        b.iter(|| {
            engine.step(black_box(Direction::Right));
            engine.step(black_box(Direction::Left));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let engine = MazeEngine::new(load_description(&open_maze(64)).unwrap());

    c.bench_function("render_64x64", |b| b.iter(|| render(black_box(&engine))));

    let mut frame = RenderFrame::default();
    c.bench_function("render_into_64x64", |b| {
        b.iter(|| render_into(black_box(&engine), &mut frame))
    });
}

criterion_group!(benches, bench_parse, bench_move, bench_render);
criterion_main!(benches);
