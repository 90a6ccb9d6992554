//! Placement and completion rules for Sudoku.

use super::grid::{BOX_SIZE, EMPTY_CELL, GRID_SIZE, Grid};
use tracing::instrument;

/// Checks whether placing `value` at `(row, col)` violates Sudoku rules.
///
/// A placement is valid when no other cell in the same row, column, or
/// 3x3 box already holds `value`. The target cell itself is excluded from
/// the scan, so re-asserting the value a cell already holds is valid.
///
/// Returns `false` for out-of-bounds coordinates or a value outside
/// `1..=9` rather than panicking.
#[instrument(skip(grid))]
pub fn is_valid_placement(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return false;
    }
    if !(1..=9).contains(&value) {
        return false;
    }

    // Row and column scans, skipping the target cell.
    for i in 0..GRID_SIZE {
        if i != col && grid.get(row, i) == Some(value) {
            return false;
        }
        if i != row && grid.get(i, col) == Some(value) {
            return false;
        }
    }

    // 3x3 box scan.
    let box_row = (row / BOX_SIZE) * BOX_SIZE;
    let box_col = (col / BOX_SIZE) * BOX_SIZE;
    for r in box_row..box_row + BOX_SIZE {
        for c in box_col..box_col + BOX_SIZE {
            if (r, c) != (row, col) && grid.get(r, c) == Some(value) {
                return false;
            }
        }
    }

    true
}

/// Checks whether every cell of the grid holds a digit `1..=9`.
///
/// Completeness says nothing about correctness: a grid full of nines
/// is complete.
#[instrument(skip(grid))]
pub fn is_complete(grid: &Grid) -> bool {
    grid.rows()
        .iter()
        .flatten()
        .all(|&value| (1..=9).contains(&value))
}

/// Checks whether the grid is a solved Sudoku.
///
/// A grid is correct when it is complete and every row, column, and
/// 3x3 box contains each digit `1..=9` exactly once. Returns `false`
/// on the first violated group.
#[instrument(skip(grid))]
pub fn is_correct(grid: &Grid) -> bool {
    if !is_complete(grid) {
        return false;
    }

    for i in 0..GRID_SIZE {
        let row = (0..GRID_SIZE).map(|c| grid.get(i, c));
        if !group_is_permutation(row) {
            return false;
        }
        let col = (0..GRID_SIZE).map(|r| grid.get(r, i));
        if !group_is_permutation(col) {
            return false;
        }
    }

    for box_row in (0..GRID_SIZE).step_by(BOX_SIZE) {
        for box_col in (0..GRID_SIZE).step_by(BOX_SIZE) {
            let cells = (box_row..box_row + BOX_SIZE)
                .flat_map(|r| (box_col..box_col + BOX_SIZE).map(move |c| grid.get(r, c)));
            if !group_is_permutation(cells) {
                return false;
            }
        }
    }

    true
}

/// Checks that nine cells hold each digit `1..=9` exactly once.
fn group_is_permutation(cells: impl Iterator<Item = Option<u8>>) -> bool {
    let mut seen = [false; GRID_SIZE];
    for cell in cells {
        match cell {
            Some(value) if (1..=9).contains(&value) => {
                let idx = (value - 1) as usize;
                if seen[idx] {
                    return false;
                }
                seen[idx] = true;
            }
            _ => return false,
        }
    }
    seen.iter().all(|&s| s)
}
