use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_crosscheck::{Sudoku, SudokuGrid};
use sudoku_crosscheck::constraint::DefaultConstraint;
use sudoku_crosscheck::driver::DEMO_PUZZLE;
use sudoku_crosscheck::solver::{
    BacktrackingSolver,
    PropagationSolver,
    Solver
};

fn demo_sudoku() -> Sudoku<DefaultConstraint> {
    let grid = SudokuGrid::from_rows(&DEMO_PUZZLE).unwrap();
    Sudoku::new_with_grid(grid, DefaultConstraint)
}

fn solved_sudoku() -> Sudoku<DefaultConstraint> {
    let mut sudoku = demo_sudoku();
    BacktrackingSolver.solve(&mut sudoku);
    sudoku
}

// A variant of the solved demonstration board with a few cells cleared such
// that naked-single propagation alone completes it again.
fn propagation_sudoku() -> Sudoku<DefaultConstraint> {
    let mut sudoku = solved_sudoku();

    for &(column, row) in &[(0, 0), (4, 4), (8, 8), (1, 2), (2, 2), (1, 7)] {
        sudoku.grid_mut().clear_cell(column, row).unwrap();
    }

    sudoku
}

fn benchmark_backtracking(c: &mut Criterion) {
    c.bench_function("backtracking demo puzzle", |b| b.iter(|| {
        let mut sudoku = demo_sudoku();
        BacktrackingSolver.solve(&mut sudoku)
    }));
}

fn benchmark_propagation(c: &mut Criterion) {
    c.bench_function("propagation naked singles", |b| b.iter(|| {
        let mut sudoku = propagation_sudoku();
        PropagationSolver.solve(&mut sudoku)
    }));
}

fn benchmark_propagation_idempotence(c: &mut Criterion) {
    c.bench_function("propagation on solved board", |b| b.iter(|| {
        let mut sudoku = solved_sudoku();
        PropagationSolver.solve(&mut sudoku)
    }));
}

criterion_group!(benches, benchmark_backtracking, benchmark_propagation,
    benchmark_propagation_idempotence);
criterion_main!(benches);
