//! This module defines constraints which can be applied to Sudoku grids,
//! thus specifying the rules of the puzzle.
//!
//! For classic Sudoku rules, [DefaultConstraint] is used. Conceptually, it
//! is a conjunction of [RowConstraint], [ColumnConstraint], and
//! [BoxConstraint]: a digit may appear at most once in each row, each
//! column, and each of the nine non-overlapping 3x3 boxes.
//!
//! All constraints are pure: checking a placement never mutates the grid and
//! has no side effects. Whether a *proposed* digit would fit into an empty
//! cell is queried through [Constraint::check_number] (usually via
//! [Sudoku::is_valid_number](crate::Sudoku::is_valid_number), which also
//! validates the arguments). Both solvers prune exclusively through this
//! query.

use crate::{BOX_SIZE, GRID_SIZE, SudokuGrid};
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

fn default_check<C>(this: &C, grid: &SudokuGrid) -> bool
where
    C: Constraint + ?Sized
{
    for row in 0..GRID_SIZE {
        for column in 0..GRID_SIZE {
            if !this.check_cell(grid, column, row) {
                return false;
            }
        }
    }

    true
}

fn default_check_cell<C>(this: &C, grid: &SudokuGrid, column: usize,
    row: usize) -> bool
where
    C: Constraint + ?Sized
{
    if let Some(number) = grid.get_cell(column, row).unwrap() {
        this.check_number(grid, column, row, number)
    }
    else {
        true
    }
}

/// A constraint defines some property on a Sudoku grid. These are
/// essentially the rules of the Sudoku: "no duplicates in a row"
/// ([RowConstraint]), "no duplicates in a column" ([ColumnConstraint]), and
/// "no duplicates in a box" ([BoxConstraint]).
///
/// Implementors of this trait only need to implement the `check_number`
/// associated function, which verifies a proposed number for a specified
/// cell. `check_cell` and `check` are implemented by default based on it,
/// however `check` in particular may be inefficient compared to a
/// specialized implementation (it checks every cell using `check_number`).
pub trait Constraint {

    /// Checks whether the given [SudokuGrid] matches this constraint, that
    /// is, every cell matches this constraint. Empty cells always match. By
    /// default, this runs `check_cell` on every cell of the grid.
    fn check(&self, grid: &SudokuGrid) -> bool {
        default_check(self, grid)
    }

    /// Checks whether the cell at the given position in the [SudokuGrid]
    /// fulfills the constraint. This is the same as calling `check_number`
    /// with the same coordinates and the number which is actually filled in
    /// that cell. If the cell is empty, this function always returns `true`.
    fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        default_check_cell(self, grid, column, row)
    }

    /// Checks whether the given `number` would fit into the cell specified
    /// by `column` and `row` into the `grid` without violating this
    /// constraint. The checked cell itself is ignored, so a cell never
    /// conflicts with its own content. This function does *not* have to
    /// check whether `number` is actually a valid digit (i.e. in the
    /// interval `[1, 9]`); if you require this guarantee, use
    /// [Sudoku::is_valid_number](crate::Sudoku::is_valid_number) instead.
    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool;
}

/// A [Constraint] that there are no duplicates in each row.
#[derive(Clone, Deserialize, Serialize)]
pub struct RowConstraint;

impl Constraint for RowConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        let mut set = DigitSet::empty();

        for row in 0..GRID_SIZE {
            set.clear();

            for column in 0..GRID_SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(number) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        for other_column in 0..GRID_SIZE {
            if other_column != column &&
                    grid.has_number(other_column, row, number).unwrap() {
                return false;
            }
        }

        true
    }
}

/// A [Constraint] that there are no duplicates in each column.
#[derive(Clone, Deserialize, Serialize)]
pub struct ColumnConstraint;

impl Constraint for ColumnConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        let mut set = DigitSet::empty();

        for column in 0..GRID_SIZE {
            set.clear();

            for row in 0..GRID_SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(number) {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        for other_row in 0..GRID_SIZE {
            if other_row != row &&
                    grid.has_number(column, other_row, number).unwrap() {
                return false;
            }
        }

        true
    }
}

fn check_number_box(grid: &SudokuGrid, column: usize, row: usize,
        number: usize, bop: impl Fn(bool, bool) -> bool) -> bool {
    let box_column = column - column % BOX_SIZE;
    let box_row = row - row % BOX_SIZE;

    for other_row in box_row..(box_row + BOX_SIZE) {
        for other_column in box_column..(box_column + BOX_SIZE) {
            if bop(other_row != row, other_column != column) &&
                    grid.has_number(other_column, other_row, number).unwrap() {
                return false;
            }
        }
    }

    true
}

fn check_boxes(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::empty();

    for box_row in 0..BOX_SIZE {
        for box_column in 0..BOX_SIZE {
            set.clear();

            let start_column = box_column * BOX_SIZE;
            let start_row = box_row * BOX_SIZE;

            for row in start_row..(start_row + BOX_SIZE) {
                for column in start_column..(start_column + BOX_SIZE) {
                    if let Some(number) =
                            grid.get_cell(column, row).unwrap() {
                        if !set.insert(number) {
                            return false;
                        }
                    }
                }
            }
        }
    }

    true
}

/// A [Constraint] that there are no duplicates in each box, i.e. each of the
/// nine non-overlapping 3x3 subgrids whose origins lie at the offsets 0, 3,
/// and 6 on both axes.
#[derive(Clone, Deserialize, Serialize)]
pub struct BoxConstraint;

impl Constraint for BoxConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        check_boxes(grid)
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        check_number_box(grid, column, row, number, |a, b| a || b)
    }
}

/// Similar to [BoxConstraint], but does not check cells in the same row and
/// column to save some time. For use in the [DefaultConstraint].
#[derive(Clone, Deserialize, Serialize)]
struct BoxConstraintNoRowColumn;

impl Constraint for BoxConstraintNoRowColumn {
    fn check(&self, grid: &SudokuGrid) -> bool {
        check_boxes(grid)
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        check_number_box(grid, column, row, number, |a, b| a && b)
    }
}

/// The default Sudoku [Constraint] which is a logical conjunction of
/// [RowConstraint], [ColumnConstraint], and [BoxConstraint]. Its
/// `check_number` is the validity check both solvers prune with: it answers
/// whether a digit appears nowhere else in the queried cell's row, column,
/// or box.
#[derive(Clone, Deserialize, Serialize)]
pub struct DefaultConstraint;

impl Constraint for DefaultConstraint {
    fn check(&self, grid: &SudokuGrid) -> bool {
        RowConstraint.check(grid) &&
            ColumnConstraint.check(grid) &&
            BoxConstraintNoRowColumn.check(grid)
    }

    fn check_cell(&self, grid: &SudokuGrid, column: usize, row: usize)
            -> bool {
        RowConstraint.check_cell(grid, column, row) &&
            ColumnConstraint.check_cell(grid, column, row) &&
            BoxConstraintNoRowColumn.check_cell(grid, column, row)
    }

    fn check_number(&self, grid: &SudokuGrid, column: usize, row: usize,
            number: usize) -> bool {
        RowConstraint.check_number(grid, column, row, number) &&
            ColumnConstraint.check_number(grid, column, row, number) &&
            BoxConstraintNoRowColumn.check_number(grid, column, row, number)
    }
}
