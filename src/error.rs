//! This module contains some error and result definitions used in this crate.

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html) and the [driver](crate::driver) module.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a cell. This is the case if
    /// it is greater than 9 or - for operations which cannot express an empty
    /// cell - zero.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the Sudoku grid. This is the case if they are greater than or equal to
    /// the grid size.
    OutOfBounds,

    /// An error that is raised when a puzzle given to the cross-checking
    /// driver cannot be solved, that is, the backtracking solver exhausted
    /// its search without finding a complete grid.
    UnsolvablePuzzle
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;
