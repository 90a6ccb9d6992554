//! Wire types for the portal backend.
//!
//! Field names here are the backend's contract: puzzle history rows come
//! back snake_case, the signed-in user endpoints camelCase. Timestamps
//! stay as the strings the backend sends; only calendar dates handled
//! locally use [`chrono`] types.

use crate::games::sudoku::Grid;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Plain `{ "data": ... }` envelope used by the game endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, new)]
pub struct DataEnvelope<T> {
    /// Wrapped payload.
    pub data: T,
}

/// `{ success, data, error }` envelope used by the user endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, new)]
pub struct UserEnvelope<T> {
    /// Whether the backend fulfilled the request.
    pub success: bool,
    /// Payload, present when `success` is true.
    pub data: Option<T>,
    /// Error message, present when `success` is false.
    pub error: Option<String>,
}

/// One puzzle history row (`/game/recent`, `/game/{name}`, `/game/date/from`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct PuzzleRow {
    game_name: String,
    difficulty: String,
    created_at: String,
}

/// One play session of the signed-in user (`/user/recent`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct UserGameRow {
    game_name: String,
    difficulty: String,
    created_at: String,
    /// Seconds the session took.
    time_taken: f64,
}

/// Per-game play count in the dashboard summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct GameNameCount {
    /// Game name; the backend reports `null` for orphaned rows.
    game_name: Option<String>,
    count: i64,
}

/// Per-difficulty play count in the dashboard summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct DifficultyCount {
    /// Difficulty tier; the backend reports `null` for orphaned rows.
    difficulty: Option<String>,
    count: i64,
}

/// Aggregates for the signed-in user (`/user/dashboard`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    points: i64,
    avg_time: f64,
    total_games_played: i64,
    played_by_games_name: Vec<GameNameCount>,
    played_by_difficulty: Vec<DifficultyCount>,
}

/// Puzzle payload of one game (`/game/one`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct PuzzleResponse {
    /// Opaque puzzle id, echoed back on completion.
    id: String,
    /// The puzzle itself; shape depends on the game.
    data: PuzzleData,
}

/// Untagged puzzle body: a 9x9 matrix for Sudoku, a word for Wordle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PuzzleData {
    /// Sudoku given grid.
    Grid(Grid),
    /// Wordle target word.
    Word(String),
}

/// Completion event posted to `/game/submit` after a win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct CompletionReport {
    /// Puzzle id from [`PuzzleResponse`].
    id: String,
    /// Elapsed play time in whole seconds.
    #[serde(rename = "time")]
    elapsed_seconds: u64,
}
