//! This module contains the propagation-based solver, which fills in cells
//! by detecting naked singles: cells whose candidate set (the digits not yet
//! excluded by row, column, or box constraints) has exactly one element.
//!
//! In contrast to backtracking, this performs no search at all. It is
//! strictly weaker: boards that require any deeper inference than repeated
//! naked singles cannot be completed and are reported as stalled.

use crate::{GRID_SIZE, Sudoku};
use crate::constraint::Constraint;
use crate::solver::Solver;
use crate::util::DigitSet;

/// The result of a single propagation [pass](PropagationSolver::pass) over
/// the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PassOutcome {

    /// After the pass, no empty cell remains.
    Solved,

    /// The pass filled at least one cell, but empty cells remain. Another
    /// pass may make further progress.
    Progress,

    /// The pass filled no cell and empty cells remain. Since candidate sets
    /// only shrink as cells are filled, no future pass can make progress
    /// either: the board has stalled.
    Stalled
}

/// The result of running the [PropagationSolver] to completion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PropagationOutcome {

    /// All cells were filled by naked-single propagation.
    Solved,

    /// Propagation stopped with empty cells remaining, none of which is a
    /// naked single. The grid keeps the partial progress made up to that
    /// point.
    Stalled
}

/// A partial [Solver] which repeatedly scans the grid for naked singles and
/// fills them in until the board is complete or no further cell can be
/// inferred.
///
/// One pass scans all 81 cells in row-major order. For each empty cell, the
/// candidate set is recomputed from scratch against the grid's *current*
/// state and discarded after the cell is decided. A cell filled early in a
/// pass is therefore already visible to candidate computations later in the
/// same pass. This accelerates convergence, but makes results pass-order
/// sensitive on boards that would require deeper inference.
///
/// The solver has no fallback search. A direct rendition would loop forever
/// on any board that stalls before completion; instead, a pass that makes no
/// progress terminates the solve with [PropagationOutcome::Stalled], which
/// is sound because a zero-progress pass proves that no naked single can
/// ever appear again. Running this solver on an already complete, valid
/// board is a no-op and reports [PropagationOutcome::Solved].
pub struct PropagationSolver;

impl PropagationSolver {

    /// Performs one pass over the grid: every empty cell whose candidate set
    /// has exactly one member is filled with that digit immediately. Returns
    /// what the pass achieved; see [PassOutcome].
    pub fn pass(&self, sudoku: &mut Sudoku<impl Constraint + Clone>)
            -> PassOutcome {
        let mut progress = false;

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                if sudoku.grid().get_cell(column, row).unwrap().is_some() {
                    continue;
                }

                let mut candidates = DigitSet::empty();

                for number in 1..=GRID_SIZE {
                    if sudoku.is_valid_number(column, row, number).unwrap() {
                        candidates.insert(number);
                    }
                }

                if let Some(number) = candidates.sole_digit() {
                    sudoku.grid_mut().set_cell(column, row, number).unwrap();
                    progress = true;
                }
            }
        }

        if sudoku.grid().is_full() {
            PassOutcome::Solved
        }
        else if progress {
            PassOutcome::Progress
        }
        else {
            PassOutcome::Stalled
        }
    }
}

impl Solver for PropagationSolver {
    type Outcome = PropagationOutcome;

    fn solve(&self, sudoku: &mut Sudoku<impl Constraint + Clone>)
            -> PropagationOutcome {
        loop {
            match self.pass(sudoku) {
                PassOutcome::Solved => return PropagationOutcome::Solved,
                PassOutcome::Progress => { },
                PassOutcome::Stalled => return PropagationOutcome::Stalled
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::SudokuGrid;
    use crate::constraint::DefaultConstraint;

    fn solved_grid() -> SudokuGrid {
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

    fn cleared(cells: &[(usize, usize)]) -> Sudoku<DefaultConstraint> {
        let mut grid = solved_grid();

        for &(column, row) in cells {
            grid.clear_cell(column, row).unwrap();
        }

        Sudoku::new_with_grid(grid, DefaultConstraint)
    }

    #[test]
    fn propagation_is_idempotent_on_complete_grid() {
        let mut sudoku =
            Sudoku::new_with_grid(solved_grid(), DefaultConstraint);

        assert_eq!(PropagationOutcome::Solved,
            PropagationSolver.solve(&mut sudoku));
        assert_eq!(&solved_grid(), sudoku.grid());
    }

    #[test]
    fn propagation_fills_naked_singles_in_one_pass() {
        // Each cleared cell is the only empty cell in its row and column.
        let mut sudoku = cleared(&[(0, 0), (4, 4), (8, 8)]);

        assert_eq!(PassOutcome::Solved, PropagationSolver.pass(&mut sudoku));
        assert_eq!(&solved_grid(), sudoku.grid());
    }

    #[test]
    fn propagation_requires_second_pass_for_dependent_cell() {
        // (1, 2) starts with candidates {4, 9}; it becomes a naked single
        // only after the first pass has filled (2, 2) and (1, 7), both of
        // which are scanned later in the same pass.
        let mut sudoku = cleared(&[(1, 2), (2, 2), (1, 7)]);

        assert_eq!(PassOutcome::Progress,
            PropagationSolver.pass(&mut sudoku));
        assert_eq!(None, sudoku.grid().get_cell(1, 2).unwrap());
        assert_eq!(PassOutcome::Solved, PropagationSolver.pass(&mut sudoku));
        assert_eq!(&solved_grid(), sudoku.grid());
    }

    #[test]
    fn propagation_solve_spans_multiple_passes() {
        let mut sudoku = cleared(&[(1, 2), (2, 2), (1, 7)]);

        assert_eq!(PropagationOutcome::Solved,
            PropagationSolver.solve(&mut sudoku));
        assert_eq!(&solved_grid(), sudoku.grid());
    }

    #[test]
    fn propagation_reports_stall_without_hanging() {
        // The four cleared cells form an unavoidable rectangle: the digits 4
        // and 9 can be swapped between them without violating any
        // constraint, so every one of the cells keeps the two-element
        // candidate set {4, 9} and no naked single exists anywhere.
        let stalled_cells = [(1, 2), (2, 2), (1, 7), (2, 7)];
        let mut sudoku = cleared(&stalled_cells);
        let before = sudoku.grid().clone();

        assert_eq!(PassOutcome::Stalled, PropagationSolver.pass(&mut sudoku));
        assert_eq!(PropagationOutcome::Stalled,
            PropagationSolver.solve(&mut sudoku));
        assert_eq!(&before, sudoku.grid());
    }

    #[test]
    fn propagation_keeps_partial_progress_on_stall() {
        // Additionally clearing (0, 0) gives one naked single; after it is
        // filled, the rectangle still stalls the solver.
        let mut sudoku = cleared(&[(0, 0), (1, 2), (2, 2), (1, 7), (2, 7)]);

        assert_eq!(PropagationOutcome::Stalled,
            PropagationSolver.solve(&mut sudoku));
        assert_eq!(Some(5), sudoku.grid().get_cell(0, 0).unwrap());
        assert_eq!(None, sudoku.grid().get_cell(1, 2).unwrap());
    }
}
