//! Wordle: guess scorer and interactive session.

mod builtin;
mod game;
mod scoring;

pub use builtin::sample_word;
pub use game::{GuessVerdict, Tile, WordleGame, WordleStatus};
pub use scoring::{GuessError, LetterState, MAX_GUESSES, WORD_LEN, is_win, score_guess};
