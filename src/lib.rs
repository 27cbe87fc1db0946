// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate solves 9x9 Sudoku with two independent algorithms and
//! cross-validates that both arrive at the same solution. It supports the
//! following key features:
//!
//! * Checking validity of individual placements and entire grids according
//! to standard Sudoku rules
//! * Solving Sudoku using a perfect backtracking algorithm
//! * Solving Sudoku by iterative naked-single constraint propagation, with
//! stall detection instead of divergence on boards it cannot finish
//! * A cross-checking driver which runs both solvers and compares their
//! results
//!
//! # Checking validity
//!
//! A [Sudoku] pairs the numbers (stored in a [SudokuGrid]) with a constraint
//! which specifies the rules. For classic Sudoku rules,
//! [DefaultConstraint](constraint::DefaultConstraint) is used. Whether a
//! digit can be placed in a cell without violating row, column, or box
//! uniqueness is decided by [Sudoku::is_valid_number].
//!
//! ```
//! use sudoku_crosscheck::{Sudoku, SudokuGrid};
//! use sudoku_crosscheck::constraint::DefaultConstraint;
//! use sudoku_crosscheck::driver::DEMO_PUZZLE;
//!
//! let grid = SudokuGrid::from_rows(&DEMO_PUZZLE).unwrap();
//! let sudoku = Sudoku::new_with_grid(grid, DefaultConstraint);
//!
//! // The top-left cell is empty; its row already contains a 7 and its
//! // column already contains a 1.
//! assert!(!sudoku.is_valid_number(0, 0, 7).unwrap());
//! assert!(!sudoku.is_valid_number(0, 0, 1).unwrap());
//! assert!(sudoku.is_valid_number(0, 0, 5).unwrap());
//! ```
//!
//! # Solving Sudoku
//!
//! Both solvers implement the [Solver](solver::Solver) trait and mutate the
//! Sudoku in place. [BacktrackingSolver](solver::BacktrackingSolver) performs
//! an exhaustive depth-first search and solves every solvable board, while
//! [PropagationSolver](solver::PropagationSolver) only fills cells that
//! become naked singles and reports a stall on boards that require deeper
//! inference.
//!
//! ```
//! use sudoku_crosscheck::{Sudoku, SudokuGrid};
//! use sudoku_crosscheck::constraint::DefaultConstraint;
//! use sudoku_crosscheck::driver::DEMO_PUZZLE;
//! use sudoku_crosscheck::solver::{BacktrackingSolver, Solver};
//!
//! let grid = SudokuGrid::from_rows(&DEMO_PUZZLE).unwrap();
//! let mut sudoku = Sudoku::new_with_grid(grid, DefaultConstraint);
//!
//! assert!(BacktrackingSolver.solve(&mut sudoku));
//! assert!(sudoku.grid().is_full());
//! assert!(sudoku.is_valid());
//! ```
//!
//! # Cross-checking
//!
//! The [driver] module runs the full demonstration: solve by backtracking,
//! re-run propagation on the already solved board, and compare snapshots.
//! See [cross_check](driver::cross_check) for details and caveats.

pub mod constraint;
pub mod driver;
pub mod error;
pub mod solver;
pub mod util;

use constraint::Constraint;
use error::{SudokuError, SudokuResult};

use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of the grid. Only classic 9x9 Sudoku are
/// supported.
pub const GRID_SIZE: usize = 9;

/// The width and height of one of the nine non-overlapping boxes which
/// partition the grid. This is the square root of [GRID_SIZE], so box
/// origins lie at the offsets 0, 3, and 6 on both axes.
pub const BOX_SIZE: usize = 3;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * GRID_SIZE + column
}

/// A 9x9 Sudoku grid, composed of 81 cells each of which may or may not be
/// occupied by a digit from 1 to 9. The grid is the single mutable entity in
/// this crate: it is created once from a puzzle, passed by mutable reference
/// into solvers, and mutated in place while they run.
///
/// `SudokuGrid` implements `Display`, rendering each cell as its digit or
/// `.` if it is empty, with a blank line before every row, an additional
/// blank line before every third row, and a space before every third column.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuGrid {
    cells: [Option<usize>; GRID_SIZE * GRID_SIZE]
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(number) = cell {
        (b'0' + number as u8) as char
    }
    else {
        '.'
    }
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            f.write_str("\n")?;

            if row % BOX_SIZE == 0 {
                f.write_str("\n")?;
            }

            for column in 0..GRID_SIZE {
                if column % BOX_SIZE == 0 {
                    f.write_str(" ")?;
                }

                write!(f, "{} ", to_char(self.cells[index(column, row)]))?;
            }
        }

        f.write_str("\n")
    }
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 Sudoku grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: [None; GRID_SIZE * GRID_SIZE]
        }
    }

    /// Creates a Sudoku grid from an array of rows, each an array of cell
    /// values, where 0 denotes an empty cell and 1 to 9 denote a filled
    /// digit. This is the form in which puzzles are provided to the
    /// [driver](crate::driver).
    ///
    /// ```
    /// use sudoku_crosscheck::SudokuGrid;
    ///
    /// let mut rows = [[0; 9]; 9];
    /// rows[2][5] = 4;
    /// let grid = SudokuGrid::from_rows(&rows).unwrap();
    ///
    /// assert_eq!(Some(4), grid.get_cell(5, 2).unwrap());
    /// assert_eq!(None, grid.get_cell(2, 5).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// If any cell value is greater than 9. In that case,
    /// `SudokuError::InvalidNumber` is returned.
    pub fn from_rows(rows: &[[usize; GRID_SIZE]; GRID_SIZE])
            -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();

        for (row, row_values) in rows.iter().enumerate() {
            for (column, &value) in row_values.iter().enumerate() {
                if value > GRID_SIZE {
                    return Err(SudokuError::InvalidNumber);
                }

                if value != 0 {
                    grid.cells[index(column, row)] = Some(value);
                }
            }
        }

        Ok(grid)
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        Ok(self.get_cell(column, row)? == Some(number))
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > GRID_SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way. The backtracking solver uses this to
    /// undo tentative placements.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. Among other things, this
    /// holds between a puzzle and any of its solutions.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| match self_cell {
                Some(_) => self_cell == other_cell,
                None => true
            })
    }
}

/// A Sudoku represents a grid of numbers with an associated constraint. The
/// numbers may or may not fulfill the constraint, but there are methods to
/// check individual placements as well as the entire grid.
#[derive(Clone)]
pub struct Sudoku<C: Constraint + Clone> {
    grid: SudokuGrid,
    constraint: C
}

impl<C: Constraint + Clone> Sudoku<C> {

    /// Creates a new Sudoku with the provided constraint and a given grid,
    /// which may already contain some numbers. Note that it is *not* checked
    /// whether the given grid fulfills the constraint - it is perfectly
    /// legal to create an invalid Sudoku here.
    pub fn new_with_grid(grid: SudokuGrid, constraint: C) -> Sudoku<C> {
        Sudoku {
            grid,
            constraint
        }
    }

    /// Gets a reference to the [SudokuGrid] of this Sudoku.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a mutable reference to the [SudokuGrid] of this Sudoku.
    pub fn grid_mut(&mut self) -> &mut SudokuGrid {
        &mut self.grid
    }

    /// Gets a reference to the [Constraint](constraint::Constraint) of this
    /// Sudoku.
    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Indicates whether the entire grid matches the constraint, i.e. no
    /// filled cell violates row, column, or box uniqueness under the
    /// [DefaultConstraint](constraint::DefaultConstraint). Empty cells are
    /// unconstrained until filled.
    pub fn is_valid(&self) -> bool {
        self.constraint.check(&self.grid)
    }

    /// Indicates whether the given number would be valid in the cell at the
    /// given location, i.e. placing it would not violate the constraint.
    /// This is a pure query; the grid is not changed.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is valid in the given
    /// cell. Must be in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn is_valid_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else if number == 0 || number > GRID_SIZE {
            Err(SudokuError::InvalidNumber)
        }
        else {
            Ok(self.constraint.check_number(&self.grid, column, row, number))
        }
    }
}
