//! Interactive Wordle session over the scoring core.

use super::scoring::{GuessError, LetterState, MAX_GUESSES, WORD_LEN, is_win, score_guess};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One cell of the guess board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Typed letter, if any.
    pub letter: Option<char>,
    /// Scoring state; `Empty` until the row is submitted.
    pub state: LetterState,
}

impl Tile {
    fn blank() -> Self {
        Self {
            letter: None,
            state: LetterState::Empty,
        }
    }
}

/// Current status of a Wordle session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordleStatus {
    /// Guessing is still open.
    Playing,
    /// The target was guessed.
    Won,
    /// Six guesses were used without a match.
    Lost,
}

/// Verdict returned by [`WordleGame::submit_guess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessVerdict {
    /// The current row holds fewer than five letters.
    NotEnoughLetters,
    /// The guess was scored; more rows remain.
    Continue,
    /// The guess matched the target.
    Won,
    /// The last row was used without a match.
    Lost,
}

/// A Wordle play session: target word and a 6x5 tile board.
///
/// The target is uppercased at construction; letters are uppercased as
/// they are typed, so comparisons inside the session are case-exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordleGame {
    target: String,
    rows: [[Tile; WORD_LEN]; MAX_GUESSES],
    current_row: usize,
    current_col: usize,
    status: WordleStatus,
}

impl WordleGame {
    /// Starts a session for the given target word.
    ///
    /// The target must be exactly five ASCII letters.
    #[instrument]
    pub fn new(target: &str) -> Result<Self, GuessError> {
        let chars: Vec<char> = target.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(GuessError::WrongLength {
                expected: WORD_LEN,
                actual: chars.len(),
            });
        }
        if let Some(&bad) = chars.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GuessError::NotALetter(bad));
        }
        Ok(Self {
            target: target.to_ascii_uppercase(),
            rows: [[Tile::blank(); WORD_LEN]; MAX_GUESSES],
            current_row: 0,
            current_col: 0,
            status: WordleStatus::Playing,
        })
    }

    /// Returns the target word (uppercase).
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the tile board, rows top to bottom.
    pub fn rows(&self) -> &[[Tile; WORD_LEN]; MAX_GUESSES] {
        &self.rows
    }

    /// Returns the index of the row being typed into.
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    /// Returns the number of letters typed into the current row.
    pub fn current_col(&self) -> usize {
        self.current_col
    }

    /// Returns the session status.
    pub fn status(&self) -> WordleStatus {
        self.status
    }

    /// Appends a letter to the current row.
    #[instrument(skip(self))]
    pub fn type_letter(&mut self, letter: char) -> Result<(), GuessError> {
        if self.status != WordleStatus::Playing {
            return Err(GuessError::Finished);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GuessError::NotALetter(letter));
        }
        if self.current_col == WORD_LEN {
            return Err(GuessError::RowFull);
        }
        self.rows[self.current_row][self.current_col] = Tile {
            letter: Some(letter.to_ascii_uppercase()),
            state: LetterState::Empty,
        };
        self.current_col += 1;
        Ok(())
    }

    /// Removes the last letter from the current row, if any.
    #[instrument(skip(self))]
    pub fn backspace(&mut self) -> Result<(), GuessError> {
        if self.status != WordleStatus::Playing {
            return Err(GuessError::Finished);
        }
        if self.current_col > 0 {
            self.current_col -= 1;
            self.rows[self.current_row][self.current_col] = Tile::blank();
        }
        Ok(())
    }

    /// Scores the current row against the target.
    ///
    /// An incomplete row returns [`GuessVerdict::NotEnoughLetters`] and
    /// leaves the board untouched. A scored row either wins, exhausts
    /// the last row (loss), or advances to the next row.
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self) -> Result<GuessVerdict, GuessError> {
        if self.status != WordleStatus::Playing {
            return Err(GuessError::Finished);
        }
        if self.current_col < WORD_LEN {
            return Ok(GuessVerdict::NotEnoughLetters);
        }

        let guess: String = self.rows[self.current_row]
            .iter()
            .filter_map(|tile| tile.letter)
            .collect();
        let states = score_guess(&guess, &self.target)?;
        for (tile, state) in self.rows[self.current_row].iter_mut().zip(states) {
            tile.state = state;
        }

        if is_win(&guess, &self.target) {
            self.status = WordleStatus::Won;
            return Ok(GuessVerdict::Won);
        }
        if self.current_row == MAX_GUESSES - 1 {
            self.status = WordleStatus::Lost;
            return Ok(GuessVerdict::Lost);
        }
        self.current_row += 1;
        self.current_col = 0;
        Ok(GuessVerdict::Continue)
    }
}
