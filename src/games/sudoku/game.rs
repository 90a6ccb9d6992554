//! Interactive Sudoku session over the pure rule core.

use super::grid::{EMPTY_CELL, GRID_SIZE, Grid};
use super::rules::{is_complete, is_correct, is_valid_placement};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// Current status of a Sudoku session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SudokuStatus {
    /// Puzzle is being filled in.
    Playing,
    /// Puzzle was submitted and verified correct.
    Won,
}

/// Verdict returned by [`SudokuGame::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitVerdict {
    /// At least one cell is still empty.
    Incomplete,
    /// Every cell is filled but a rule is violated.
    Incorrect,
    /// The grid is a valid solution.
    Won,
}

/// Direction for cursor movement on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Error that can occur when editing the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The target cell holds a given clue and cannot be edited.
    #[display("Cell ({}, {}) is a given clue", _0, _1)]
    GivenCell(usize, usize),

    /// The entered digit is outside 1-9.
    #[display("Digit {} is out of range (must be 1-9)", _0)]
    DigitOutOfRange(u8),

    /// The target cell is outside the 9x9 board.
    #[display("Cell ({}, {}) is out of bounds", _0, _1)]
    OutOfBounds(usize, usize),

    /// The puzzle is already solved.
    #[display("Puzzle is already solved")]
    Finished,
}

impl std::error::Error for PlayError {}

/// A Sudoku play session: given clues, working grid, cursor, and conflicts.
///
/// The given puzzle is immutable for the life of the session. Edits land in
/// the working grid, which starts as a copy of the givens. Each edit
/// re-evaluates only the edited cell against [`is_valid_placement`], so the
/// conflict set mirrors what the player has been told, not a global audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuGame {
    givens: Grid,
    working: Grid,
    cursor: (usize, usize),
    conflicts: HashSet<(usize, usize)>,
    status: SudokuStatus,
}

impl SudokuGame {
    /// Starts a session from a puzzle payload.
    #[instrument(skip(puzzle))]
    pub fn new(puzzle: Grid) -> Self {
        Self {
            givens: puzzle,
            working: puzzle,
            cursor: (0, 0),
            conflicts: HashSet::new(),
            status: SudokuStatus::Playing,
        }
    }

    /// Returns the immutable given puzzle.
    pub fn givens(&self) -> &Grid {
        &self.givens
    }

    /// Returns the working grid with the player's entries.
    pub fn working(&self) -> &Grid {
        &self.working
    }

    /// Returns the cursor as `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Returns the session status.
    pub fn status(&self) -> SudokuStatus {
        self.status
    }

    /// Checks whether the given cell held a clue in the original puzzle.
    pub fn is_given(&self, row: usize, col: usize) -> bool {
        matches!(self.givens.get(row, col), Some(v) if v != EMPTY_CELL)
    }

    /// Checks whether the given cell is flagged as conflicting.
    pub fn is_conflict(&self, row: usize, col: usize) -> bool {
        self.conflicts.contains(&(row, col))
    }

    /// Returns how many cells are currently flagged as conflicting.
    pub fn conflict_count(&self) -> usize {
        self.conflicts.len()
    }

    /// Moves the cursor to a specific cell.
    #[instrument(skip(self))]
    pub fn select(&mut self, row: usize, col: usize) -> Result<(), PlayError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(PlayError::OutOfBounds(row, col));
        }
        self.cursor = (row, col);
        Ok(())
    }

    /// Moves the cursor one step, clamped at the board edges.
    #[instrument(skip(self))]
    pub fn move_cursor(&mut self, dir: MoveDir) {
        let (row, col) = self.cursor;
        self.cursor = match dir {
            MoveDir::Up => (row.saturating_sub(1), col),
            MoveDir::Down => ((row + 1).min(GRID_SIZE - 1), col),
            MoveDir::Left => (row, col.saturating_sub(1)),
            MoveDir::Right => (row, (col + 1).min(GRID_SIZE - 1)),
        };
    }

    /// Writes a digit into the cell under the cursor.
    ///
    /// Given cells are rejected and left untouched. The edited cell's
    /// conflict flag is refreshed from [`is_valid_placement`].
    #[instrument(skip(self))]
    pub fn enter(&mut self, digit: u8) -> Result<(), PlayError> {
        if self.status == SudokuStatus::Won {
            return Err(PlayError::Finished);
        }
        if !(1..=9).contains(&digit) {
            return Err(PlayError::DigitOutOfRange(digit));
        }
        let (row, col) = self.cursor;
        if self.is_given(row, col) {
            return Err(PlayError::GivenCell(row, col));
        }
        self.working
            .set(row, col, digit)
            .map_err(|_| PlayError::OutOfBounds(row, col))?;
        if is_valid_placement(&self.working, row, col, digit) {
            self.conflicts.remove(&(row, col));
        } else {
            self.conflicts.insert((row, col));
        }
        Ok(())
    }

    /// Empties the cell under the cursor and drops its conflict flag.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), PlayError> {
        if self.status == SudokuStatus::Won {
            return Err(PlayError::Finished);
        }
        let (row, col) = self.cursor;
        if self.is_given(row, col) {
            return Err(PlayError::GivenCell(row, col));
        }
        self.working
            .set(row, col, EMPTY_CELL)
            .map_err(|_| PlayError::OutOfBounds(row, col))?;
        self.conflicts.remove(&(row, col));
        Ok(())
    }

    /// Judges the working grid against the completion and correctness rules.
    ///
    /// A winning submission moves the session to [`SudokuStatus::Won`];
    /// later edits are rejected with [`PlayError::Finished`].
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> SubmitVerdict {
        if self.status == SudokuStatus::Won {
            return SubmitVerdict::Won;
        }
        if !is_complete(&self.working) {
            return SubmitVerdict::Incomplete;
        }
        if !is_correct(&self.working) {
            return SubmitVerdict::Incorrect;
        }
        self.status = SudokuStatus::Won;
        SubmitVerdict::Won
    }
}
