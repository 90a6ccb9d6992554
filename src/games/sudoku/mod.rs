//! Sudoku: grid type, rule checker, and interactive session.

mod builtin;
mod game;
mod grid;
mod rules;

pub use builtin::{sample_puzzle, sample_solution};
pub use game::{MoveDir, PlayError, SubmitVerdict, SudokuGame, SudokuStatus};
pub use grid::{BOX_SIZE, EMPTY_CELL, GRID_SIZE, Grid};
pub use rules::{is_complete, is_correct, is_valid_placement};
