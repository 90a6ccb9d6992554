//! Guess scoring for Wordle.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::instrument;

/// Number of letters in a word.
pub const WORD_LEN: usize = 5;

/// Number of guesses a player gets.
pub const MAX_GUESSES: usize = 6;

/// Classification of one letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterState {
    /// Tile has not been scored (unfilled row).
    Empty,
    /// Letter matches the target at this position.
    Exact,
    /// Letter occurs in the target at a different position.
    Present,
    /// Letter does not occur in the target (or all copies are claimed).
    Absent,
}

/// Error that can occur when scoring or entering a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The word does not have exactly five letters.
    #[display("Word must have {} letters, got {}", expected, actual)]
    WrongLength {
        /// Required letter count.
        expected: usize,
        /// Letter count of the rejected word.
        actual: usize,
    },

    /// The typed character is not a letter.
    #[display("'{}' is not a letter", _0)]
    NotALetter(char),

    /// The current row already holds five letters.
    #[display("Current row is already full")]
    RowFull,

    /// The game has already been won or lost.
    #[display("Game is already over")]
    Finished,
}

impl std::error::Error for GuessError {}

/// Scores a guess against the target word.
///
/// Both words must have exactly five letters; comparison is
/// case-insensitive. Scoring runs in two passes so duplicate letters
/// come out right: exact matches claim their target letters first, then
/// remaining guess letters are `Present` only while unclaimed copies of
/// that letter are left in the target. A guess letter is never marked
/// more times than it occurs in the target.
#[instrument]
pub fn score_guess(guess: &str, target: &str) -> Result<[LetterState; WORD_LEN], GuessError> {
    let guess = to_letters(guess)?;
    let target = to_letters(target)?;

    let mut remaining: HashMap<char, u8> = HashMap::new();
    for &letter in &target {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    let mut states = [LetterState::Absent; WORD_LEN];

    // First pass: exact matches claim their letters.
    for i in 0..WORD_LEN {
        if guess[i] == target[i] {
            states[i] = LetterState::Exact;
            if let Some(count) = remaining.get_mut(&guess[i]) {
                *count -= 1;
            }
        }
    }

    // Second pass: mark present while unclaimed copies remain.
    for i in 0..WORD_LEN {
        if states[i] == LetterState::Exact {
            continue;
        }
        if let Some(count) = remaining.get_mut(&guess[i])
            && *count > 0
        {
            *count -= 1;
            states[i] = LetterState::Present;
        }
    }

    Ok(states)
}

/// Checks whether the guess matches the target, ignoring case.
#[instrument]
pub fn is_win(guess: &str, target: &str) -> bool {
    guess.eq_ignore_ascii_case(target)
}

/// Uppercases a word into a fixed five-letter array.
fn to_letters(word: &str) -> Result<[char; WORD_LEN], GuessError> {
    let letters: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
    let actual = letters.len();
    letters
        .try_into()
        .map_err(|_| GuessError::WrongLength {
            expected: WORD_LEN,
            actual,
        })
}
