//! This module contains the cross-checking driver which runs the full
//! demonstration: solve a puzzle with the [BacktrackingSolver], then run the
//! [PropagationSolver] on the same board and compare snapshots of both
//! results.

use crate::{Sudoku, SudokuGrid};
use crate::constraint::DefaultConstraint;
use crate::error::{SudokuError, SudokuResult};
use crate::solver::{
    BacktrackingSolver,
    PropagationOutcome,
    PropagationSolver,
    Solver
};

/// The demonstration puzzle solved by the binary, with 0 marking empty
/// cells. It is deliberately a plain array literal so alternative puzzles
/// can be fed to [cross_check] the same way.
pub const DEMO_PUZZLE: [[usize; 9]; 9] = [
    [0, 7, 0, 0, 0, 4, 0, 0, 0],
    [1, 2, 6, 0, 9, 5, 0, 0, 0],
    [3, 4, 0, 6, 0, 0, 5, 0, 0],
    [0, 8, 2, 0, 5, 0, 9, 0, 1],
    [0, 0, 1, 2, 0, 0, 0, 0, 0],
    [4, 5, 3, 9, 6, 1, 0, 0, 0],
    [8, 3, 7, 5, 0, 0, 0, 4, 6],
    [0, 0, 4, 0, 0, 0, 0, 5, 0],
    [6, 1, 0, 7, 4, 0, 8, 0, 3]
];

const IDENTICAL_MESSAGE: &str =
    "[INFO] The solutions provided by the two methods were identical.";
const MISMATCH_MESSAGE: &str =
    "[WARN] The solution provided by the two methods did not match.";

/// The result of a [cross_check] run: the final state of the board together
/// with the verdict of the snapshot comparison.
pub struct CrossCheckReport {
    grid: SudokuGrid,
    identical: bool,
    propagation: PropagationOutcome
}

impl CrossCheckReport {

    /// Gets the final state of the board after both solvers have run.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Indicates whether the snapshots taken after each solver were equal.
    pub fn identical(&self) -> bool {
        self.identical
    }

    /// Gets the outcome the propagation solver reported. Since it runs on a
    /// board the backtracking solver has already completed, this is always
    /// [PropagationOutcome::Solved].
    pub fn propagation(&self) -> PropagationOutcome {
        self.propagation
    }

    /// Gets the fixed message describing the verdict, as printed by the
    /// demonstration binary.
    pub fn message(&self) -> &'static str {
        if self.identical {
            IDENTICAL_MESSAGE
        }
        else {
            MISMATCH_MESSAGE
        }
    }
}

/// Runs the cross-checking demonstration on the given puzzle (0 marking
/// empty cells): solve it completely with the [BacktrackingSolver], snapshot
/// the result, run the [PropagationSolver] on the same, already solved
/// board, snapshot again, and compare both snapshots.
///
/// Note that this invocation order makes the comparison a structural
/// self-check rather than a real cross-validation: the propagation solver
/// only ever sees a complete board, so it can merely confirm that
/// propagation is a no-op there, and the snapshots cannot meaningfully
/// differ. Running propagation on the original puzzle instead would change
/// observable behavior (and stall on puzzles that require search), so the
/// order is kept as is.
///
/// # Errors
///
/// * `SudokuError::InvalidNumber` If the puzzle contains a value greater
/// than 9.
/// * `SudokuError::UnsolvablePuzzle` If the backtracking solver cannot
/// complete the puzzle.
pub fn cross_check(puzzle: &[[usize; 9]; 9])
        -> SudokuResult<CrossCheckReport> {
    let grid = SudokuGrid::from_rows(puzzle)?;
    let mut sudoku = Sudoku::new_with_grid(grid, DefaultConstraint);

    if !BacktrackingSolver.solve(&mut sudoku) {
        return Err(SudokuError::UnsolvablePuzzle);
    }

    let backtracking_snapshot = sudoku.grid().clone();
    let propagation = PropagationSolver.solve(&mut sudoku);
    let identical = &backtracking_snapshot == sudoku.grid();

    Ok(CrossCheckReport {
        grid: sudoku.grid().clone(),
        identical,
        propagation
    })
}
