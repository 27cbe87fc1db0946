//! This module contains the logic for solving Sudoku.
//!
//! It contains the definition of the [Solver] trait and the
//! [BacktrackingSolver], an exhaustive depth-first search which can solve
//! any solvable board. The weaker, propagation-based solver lives in the
//! [propagation] submodule and is re-exported here.

use crate::{GRID_SIZE, Sudoku};
use crate::constraint::Constraint;

pub mod propagation;

pub use propagation::{PassOutcome, PropagationOutcome, PropagationSolver};

/// A trait for structs which have the ability to solve Sudoku. Solvers
/// mutate the given Sudoku's grid in place for the duration of a solve call
/// and return control once solving terminates, successfully or not. Not all
/// implementers are able to solve every solvable board; what "terminated"
/// means is expressed by the implementation-specific [Solver::Outcome].
pub trait Solver {

    /// The result type of a completed solve call, such as a success flag or
    /// a more detailed status report.
    type Outcome;

    /// Solves, or attempts to solve, the provided Sudoku in place. On
    /// return, the grid holds whatever progress the solver made; see the
    /// implementing type for guarantees about the grid's state for each
    /// possible outcome.
    fn solve(&self, sudoku: &mut Sudoku<impl Constraint + Clone>)
        -> Self::Outcome;
}

/// A perfect [Solver] which solves Sudoku by recursively testing all valid
/// digits for each empty cell, in row-major cell order and ascending digit
/// order. Its worst-case runtime is exponential, which is acceptable for the
/// fixed problem size of 81 cells and 9 symbols.
///
/// `solve` returns `true` if and only if the grid is fully and validly
/// filled upon return. Since digits are tried in ascending order and the
/// first success propagates upward immediately, the search is deterministic:
/// repeated runs on the same initial grid produce identical results, even
/// for puzzles with more than one solution. On failure, every tentative
/// placement has been undone, so the grid is returned in its initial state.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(sudoku: &mut Sudoku<impl Constraint + Clone>, column: usize,
            row: usize) -> bool {
        if row == GRID_SIZE {
            // Walked past the last cell, so every cell is validly filled.
            return true;
        }

        let next_column = (column + 1) % GRID_SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if sudoku.grid().get_cell(column, row).unwrap().is_some() {
            return BacktrackingSolver::solve_rec(sudoku, next_column,
                next_row);
        }

        for number in 1..=GRID_SIZE {
            if sudoku.is_valid_number(column, row, number).unwrap() {
                sudoku.grid_mut().set_cell(column, row, number).unwrap();

                if BacktrackingSolver::solve_rec(sudoku, next_column,
                        next_row) {
                    return true;
                }

                sudoku.grid_mut().clear_cell(column, row).unwrap();
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    type Outcome = bool;

    fn solve(&self, sudoku: &mut Sudoku<impl Constraint + Clone>) -> bool {
        BacktrackingSolver::solve_rec(sudoku, 0, 0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::SudokuGrid;
    use crate::constraint::DefaultConstraint;
    use crate::driver::DEMO_PUZZLE;

    fn demo_solution() -> SudokuGrid {
        SudokuGrid::from_rows(&[
            [5, 7, 8, 1, 3, 4, 6, 2, 9],
            [1, 2, 6, 8, 9, 5, 3, 7, 4],
            [3, 4, 9, 6, 2, 7, 5, 1, 8],
            [7, 8, 2, 4, 5, 3, 9, 6, 1],
            [9, 6, 1, 2, 7, 8, 4, 3, 5],
            [4, 5, 3, 9, 6, 1, 7, 8, 2],
            [8, 3, 7, 5, 1, 9, 2, 4, 6],
            [2, 9, 4, 3, 8, 6, 1, 5, 7],
            [6, 1, 5, 7, 4, 2, 8, 9, 3]
        ]).unwrap()
    }

    // A grid whose filled cells are mutually consistent, but whose first
    // empty cell (8, 0) has no candidate: its row rules out 1 to 8 and its
    // column already contains a 9.
    fn unsolvable_puzzle() -> SudokuGrid {
        SudokuGrid::from_rows(&[
            [1, 2, 3, 4, 5, 6, 7, 8, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 9],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0, 0]
        ]).unwrap()
    }

    #[test]
    fn backtracking_solves_demo_puzzle() {
        let grid = SudokuGrid::from_rows(&DEMO_PUZZLE).unwrap();
        let mut sudoku = Sudoku::new_with_grid(grid.clone(), DefaultConstraint);

        assert!(BacktrackingSolver.solve(&mut sudoku));
        assert!(sudoku.grid().is_full());
        assert!(sudoku.is_valid());
        assert!(grid.is_subset(sudoku.grid()));
        assert_eq!(&demo_solution(), sudoku.grid());
    }

    #[test]
    fn backtracking_is_deterministic() {
        let grid = SudokuGrid::from_rows(&DEMO_PUZZLE).unwrap();
        let mut first = Sudoku::new_with_grid(grid.clone(), DefaultConstraint);
        let mut second = Sudoku::new_with_grid(grid, DefaultConstraint);

        assert!(BacktrackingSolver.solve(&mut first));
        assert!(BacktrackingSolver.solve(&mut second));
        assert_eq!(first.grid(), second.grid());
    }

    #[test]
    fn backtracking_solves_empty_grid() {
        let mut sudoku =
            Sudoku::new_with_grid(SudokuGrid::new(), DefaultConstraint);

        assert!(BacktrackingSolver.solve(&mut sudoku));
        assert!(sudoku.grid().is_full());
        assert!(sudoku.is_valid());
    }

    #[test]
    fn backtracking_leaves_full_grid_untouched() {
        let solution = demo_solution();
        let mut sudoku =
            Sudoku::new_with_grid(solution.clone(), DefaultConstraint);

        assert!(BacktrackingSolver.solve(&mut sudoku));
        assert_eq!(&solution, sudoku.grid());
    }

    #[test]
    fn backtracking_fails_and_restores_unsolvable_puzzle() {
        let puzzle = unsolvable_puzzle();
        let mut sudoku =
            Sudoku::new_with_grid(puzzle.clone(), DefaultConstraint);

        assert!(!BacktrackingSolver.solve(&mut sudoku));

        // Every tentative placement must have been undone.
        assert_eq!(&puzzle, sudoku.grid());
    }
}
