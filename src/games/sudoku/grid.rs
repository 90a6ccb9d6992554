//! The 9x9 Sudoku grid type.

use serde::{Deserialize, Serialize};

/// Number of rows (and columns) in a grid.
pub const GRID_SIZE: usize = 9;

/// Side length of one 3x3 box.
pub const BOX_SIZE: usize = 3;

/// Cell value marking an empty cell.
pub const EMPTY_CELL: u8 = 0;

/// A 9x9 Sudoku grid.
///
/// Cells hold `0` (empty) or a digit `1..=9`, row-major. Construction does not
/// reject out-of-range values: grids arrive from the backend wire, and the
/// rule predicates in [`rules`](super::rules) are the arbiters of validity.
/// A grid containing junk simply never passes [`is_correct`](super::rules::is_correct).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates a grid with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[EMPTY_CELL; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Creates a grid from row-major cell values.
    pub fn from_rows(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the value at the given cell, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Sets the value at the given cell.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<(), &'static str> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err("Cell out of bounds");
        }
        self.cells[row][col] = value;
        Ok(())
    }

    /// Checks if the given cell is empty.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(EMPTY_CELL)
    }

    /// Returns all cells as row-major arrays.
    pub fn rows(&self) -> &[[u8; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Formats the grid as a human-readable string with box separators.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row_idx, row) in self.cells.iter().enumerate() {
            for (col_idx, &value) in row.iter().enumerate() {
                if value == EMPTY_CELL {
                    result.push('.');
                } else {
                    result.push_str(&value.to_string());
                }
                if col_idx % BOX_SIZE == BOX_SIZE - 1 && col_idx < GRID_SIZE - 1 {
                    result.push_str(" | ");
                } else if col_idx < GRID_SIZE - 1 {
                    result.push(' ');
                }
            }
            if row_idx % BOX_SIZE == BOX_SIZE - 1 && row_idx < GRID_SIZE - 1 {
                result.push_str("\n------+-------+------");
            }
            if row_idx < GRID_SIZE - 1 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}
