//! Tests for backend wire shapes.

use puzzle_portal::{
    CompletionReport, DashboardSummary, DataEnvelope, PuzzleData, PuzzleResponse, PuzzleRow,
    UserEnvelope, UserGameRow, sample_puzzle,
};
use serde_json::json;

#[test]
fn test_game_list_envelope() {
    let payload = json!({ "data": ["sudoku", "wordle"] });
    let envelope: DataEnvelope<Vec<String>> =
        serde_json::from_value(payload).expect("Envelope should decode");
    assert_eq!(envelope.data, vec!["sudoku", "wordle"]);
}

#[test]
fn test_puzzle_rows_are_snake_case() {
    let payload = json!({
        "data": [{
            "game_name": "sudoku",
            "difficulty": "easy",
            "created_at": "2025-03-14T09:00:00.000Z"
        }]
    });
    let envelope: DataEnvelope<Vec<PuzzleRow>> =
        serde_json::from_value(payload).expect("Rows should decode");
    let row = &envelope.data[0];
    assert_eq!(row.game_name(), "sudoku");
    assert_eq!(row.difficulty(), "easy");
    assert_eq!(row.created_at(), "2025-03-14T09:00:00.000Z");
}

#[test]
fn test_user_rows_are_camel_case() {
    let payload = json!({
        "gameName": "wordle",
        "difficulty": "hard",
        "createdAt": "2025-03-14T09:00:00.000Z",
        "timeTaken": 42.5
    });
    let row: UserGameRow = serde_json::from_value(payload).expect("Row should decode");
    assert_eq!(row.game_name(), "wordle");
    assert_eq!(*row.time_taken(), 42.5);
}

#[test]
fn test_dashboard_envelope_with_nulls() {
    let payload = json!({
        "success": true,
        "data": {
            "points": 120,
            "avgTime": 93.4,
            "totalGamesPlayed": 17,
            "playedByGamesName": [
                { "gameName": "sudoku", "count": 11 },
                { "gameName": null, "count": 2 }
            ],
            "playedByDifficulty": [
                { "difficulty": "easy", "count": 9 },
                { "difficulty": null, "count": 1 }
            ]
        },
        "error": null
    });
    let envelope: UserEnvelope<DashboardSummary> =
        serde_json::from_value(payload).expect("Dashboard should decode");
    assert!(envelope.success);

    let summary = envelope.data.expect("Data present on success");
    assert_eq!(*summary.points(), 120);
    assert_eq!(*summary.total_games_played(), 17);
    assert_eq!(summary.played_by_games_name().len(), 2);
    assert_eq!(
        summary.played_by_games_name()[1].game_name(),
        &None,
        "Backend reports null for orphaned rows"
    );
    assert_eq!(*summary.played_by_difficulty()[1].count(), 1);
}

#[test]
fn test_failure_envelope_carries_error() {
    let payload = json!({
        "success": false,
        "data": null,
        "error": "not signed in"
    });
    let envelope: UserEnvelope<DashboardSummary> =
        serde_json::from_value(payload).expect("Envelope should decode");
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
    assert_eq!(envelope.error.as_deref(), Some("not signed in"));
}

#[test]
fn test_puzzle_payload_untagged_grid() {
    let grid_json = serde_json::to_value(sample_puzzle()).expect("Grid serializes");
    let payload = json!({ "id": "sudoku-2025-03-14", "data": grid_json });
    let puzzle: PuzzleResponse = serde_json::from_value(payload).expect("Puzzle should decode");
    assert_eq!(puzzle.id(), "sudoku-2025-03-14");
    match puzzle.data() {
        PuzzleData::Grid(grid) => assert_eq!(*grid, sample_puzzle()),
        PuzzleData::Word(word) => panic!("Expected a grid, got word {:?}", word),
    }
}

#[test]
fn test_puzzle_payload_untagged_word() {
    let payload = json!({ "id": "wordle-2025-03-14", "data": "crane" });
    let puzzle: PuzzleResponse = serde_json::from_value(payload).expect("Puzzle should decode");
    match puzzle.data() {
        PuzzleData::Word(word) => assert_eq!(word, "crane"),
        PuzzleData::Grid(_) => panic!("Expected a word, got a grid"),
    }
}

#[test]
fn test_completion_report_wire_key_is_time() {
    let report = CompletionReport::new("sudoku-2025-03-14".to_string(), 93);
    let value = serde_json::to_value(&report).expect("Report serializes");
    assert_eq!(value, json!({ "id": "sudoku-2025-03-14", "time": 93 }));
}

#[test]
fn test_grid_wire_shape_is_bare_matrix() {
    let value = serde_json::to_value(sample_puzzle()).expect("Grid serializes");
    let rows = value.as_array().expect("Grid is a bare JSON array");
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0][0], json!(5));
}
