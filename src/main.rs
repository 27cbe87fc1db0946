//! Runs the fixed cross-checking demonstration: solve the demonstration
//! puzzle by backtracking, re-run naked-single propagation on the solved
//! board, print the final grid, and report whether both snapshots were
//! identical. Takes no arguments and always exits successfully.

use sudoku_crosscheck::driver::{self, DEMO_PUZZLE};

fn main() {
    let report = driver::cross_check(&DEMO_PUZZLE)
        .expect("the demonstration puzzle is well-formed and solvable");

    print!("{}", report.grid());
    println!("{}", report.message());
}
