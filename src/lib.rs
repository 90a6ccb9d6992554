//! Puzzle Portal library - terminal client for a daily-puzzle backend
//!
//! This library provides the building blocks of the portal client.
//!
//! # Architecture
//!
//! - **Games**: pure rule checkers and interactive sessions for sudoku
//!   and wordle
//! - **Api**: typed REST client for the puzzle backend
//! - **Lobby**: multi-screen terminal UI driven by a screen state machine
//! - **Session**: play-session bookkeeping (puzzle id, clock, submission)
//!
//! # Example
//!
//! ```no_run
//! use puzzle_portal::{LetterState, is_win, score_guess};
//!
//! # fn example() -> Result<(), puzzle_portal::GuessError> {
//! // Score a guess against the day's target word
//! let marks = score_guess("crane", "trace")?;
//! assert_eq!(marks[2], LetterState::Exact);
//! assert!(!is_win("crane", "trace"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod config;
mod games;
mod lobby;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, ENV_BASE_URL, ENV_COOKIE, PortalConfig};

// Crate-level exports - REST client
pub use api::{
    ApiError, CompletionReport, DashboardSummary, DataEnvelope, DifficultyCount, GameNameCount,
    PortalClient, PuzzleData, PuzzleResponse, PuzzleRow, UserEnvelope, UserGameRow,
};

// Crate-level exports - Lobby
pub use lobby::{
    HistoryQuery, HistorySource, LobbyContext, LobbyController, Screen, ScreenTransition,
};

// Crate-level exports - Session bookkeeping
pub use session::{PlayClock, PlaySession};

// Crate-level exports - Game vocabulary
pub use games::{Difficulty, GameKind};

// Crate-level exports - Sudoku
pub use games::sudoku::{
    BOX_SIZE, EMPTY_CELL, GRID_SIZE, Grid, MoveDir, PlayError, SubmitVerdict, SudokuGame,
    SudokuStatus, is_complete, is_correct, is_valid_placement, sample_puzzle, sample_solution,
};

// Crate-level exports - Wordle
pub use games::wordle::{
    GuessError, GuessVerdict, LetterState, MAX_GUESSES, Tile, WORD_LEN, WordleGame, WordleStatus,
    is_win, sample_word, score_guess,
};
