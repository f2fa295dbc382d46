use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use std::hint::black_box;
use common::games::SessionRng;
use common::games::snake::{Cell, Direction, Food, Grid, SnakeGameState};

/// Sweeps the field in columns (down one column, up the next) until the snake
/// hits a wall or itself.
fn bench_play_serpentine_game() {
    let grid = Grid::new(700, 700, 25);
    let mut rng = SessionRng::new(42);
    let mut game = SnakeGameState::new(grid, 3, &mut rng).unwrap();

    while game.is_running() {
        let head = game.snake().head();
        let going_down = game.direction() == Direction::Down;
        let at_edge = if going_down {
            head.y + grid.cell_size() >= grid.height()
        } else {
            head.y == 0
        };

        if game.direction() == Direction::Right {
            game.change_direction(if head.y == 0 { Direction::Down } else { Direction::Up });
        } else if at_edge {
            game.change_direction(Direction::Right);
        }
        game.tick(&mut rng).unwrap();
    }
}

fn bench_spawn_on_crowded_grid() {
    let grid = Grid::new(700, 700, 25);
    let free = grid.cell_at(grid.columns() - 1, grid.rows() - 1);
    let occupied: HashSet<Cell> = (0..grid.columns())
        .flat_map(|c| (0..grid.rows()).map(move |r| (c, r)))
        .map(|(c, r)| grid.cell_at(c, r))
        .filter(|cell| *cell != free)
        .collect();

    let mut rng = SessionRng::new(7);
    let food = Food::spawn(&grid, &occupied, &mut rng).unwrap();
    black_box(food);
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");

    group.bench_function("serpentine_game", |b| {
        b.iter(bench_play_serpentine_game)
    });

    group.bench_function("spawn_last_free_cell", |b| {
        b.iter(bench_spawn_on_crowded_grid)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
