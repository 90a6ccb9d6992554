//! Tests for the interactive sudoku session.

use puzzle_portal::{
    PlayError, SubmitVerdict, SudokuGame, SudokuStatus, sample_puzzle, sample_solution,
};

/// Fills every non-given cell from the recorded solution.
fn fill_from_solution(game: &mut SudokuGame) {
    let solution = sample_solution();
    for row in 0..9 {
        for col in 0..9 {
            if !game.is_given(row, col) {
                game.select(row, col).expect("Cell in bounds");
                let digit = solution.get(row, col).expect("Cell in bounds");
                game.enter(digit).expect("Solution digit should be accepted");
            }
        }
    }
}

#[test]
fn test_new_session_copies_givens() {
    let game = SudokuGame::new(sample_puzzle());
    assert_eq!(game.working(), game.givens());
    assert_eq!(game.cursor(), (0, 0));
    assert_eq!(game.status(), SudokuStatus::Playing);
    assert_eq!(game.conflict_count(), 0);
}

#[test]
fn test_given_cell_rejects_entry() {
    let mut game = SudokuGame::new(sample_puzzle());
    // (0, 0) holds the given clue 5.
    game.select(0, 0).expect("Cell in bounds");
    let result = game.enter(1);
    assert_eq!(result, Err(PlayError::GivenCell(0, 0)));
    assert_eq!(
        game.working().get(0, 0),
        Some(5),
        "Rejected write must leave the grid unchanged"
    );
}

#[test]
fn test_given_cell_rejects_clear() {
    let mut game = SudokuGame::new(sample_puzzle());
    game.select(0, 0).expect("Cell in bounds");
    assert_eq!(game.clear(), Err(PlayError::GivenCell(0, 0)));
    assert_eq!(game.working().get(0, 0), Some(5));
}

#[test]
fn test_entry_lands_in_working_grid_only() {
    let mut game = SudokuGame::new(sample_puzzle());
    // (0, 2) is empty in the puzzle; 4 is its solution digit.
    game.select(0, 2).expect("Cell in bounds");
    game.enter(4).expect("Entry should be accepted");
    assert_eq!(game.working().get(0, 2), Some(4));
    assert_eq!(game.givens().get(0, 2), Some(0), "Givens stay untouched");
}

#[test]
fn test_conflicting_entry_flagged_but_recorded() {
    let mut game = SudokuGame::new(sample_puzzle());
    // 5 already sits at (0, 0) in the same row.
    game.select(0, 2).expect("Cell in bounds");
    game.enter(5).expect("Conflicting digit is still written");
    assert!(game.is_conflict(0, 2));
    assert_eq!(game.conflict_count(), 1);
    assert_eq!(game.working().get(0, 2), Some(5));
}

#[test]
fn test_conflict_clears_on_valid_rewrite() {
    let mut game = SudokuGame::new(sample_puzzle());
    game.select(0, 2).expect("Cell in bounds");
    game.enter(5).expect("Entry accepted");
    assert!(game.is_conflict(0, 2));

    game.enter(4).expect("Entry accepted");
    assert!(!game.is_conflict(0, 2), "Valid rewrite drops the flag");
    assert_eq!(game.conflict_count(), 0);
}

#[test]
fn test_conflict_clears_on_erase() {
    let mut game = SudokuGame::new(sample_puzzle());
    game.select(0, 2).expect("Cell in bounds");
    game.enter(5).expect("Entry accepted");
    assert!(game.is_conflict(0, 2));

    game.clear().expect("Clear accepted");
    assert!(!game.is_conflict(0, 2));
    assert!(game.working().is_empty_at(0, 2));
}

#[test]
fn test_digit_out_of_range_rejected() {
    let mut game = SudokuGame::new(sample_puzzle());
    game.select(0, 2).expect("Cell in bounds");
    assert_eq!(game.enter(0), Err(PlayError::DigitOutOfRange(0)));
    assert_eq!(game.enter(10), Err(PlayError::DigitOutOfRange(10)));
}

#[test]
fn test_select_out_of_bounds_rejected() {
    let mut game = SudokuGame::new(sample_puzzle());
    assert_eq!(game.select(9, 0), Err(PlayError::OutOfBounds(9, 0)));
    assert_eq!(game.select(0, 9), Err(PlayError::OutOfBounds(0, 9)));
    assert_eq!(game.cursor(), (0, 0), "Failed select leaves the cursor");
}

#[test]
fn test_cursor_clamps_at_edges() {
    use puzzle_portal::MoveDir;

    let mut game = SudokuGame::new(sample_puzzle());
    game.move_cursor(MoveDir::Up);
    game.move_cursor(MoveDir::Left);
    assert_eq!(game.cursor(), (0, 0));

    game.select(8, 8).expect("Cell in bounds");
    game.move_cursor(MoveDir::Down);
    game.move_cursor(MoveDir::Right);
    assert_eq!(game.cursor(), (8, 8));

    game.move_cursor(MoveDir::Up);
    assert_eq!(game.cursor(), (7, 8));
}

#[test]
fn test_submit_incomplete_grid() {
    let mut game = SudokuGame::new(sample_puzzle());
    assert_eq!(game.submit(), SubmitVerdict::Incomplete);
    assert_eq!(game.status(), SudokuStatus::Playing);
}

#[test]
fn test_submit_incorrect_grid() {
    let mut game = SudokuGame::new(sample_puzzle());
    fill_from_solution(&mut game);

    // Overwrite one solved cell with a wrong digit; the grid stays full.
    game.select(0, 2).expect("Cell in bounds");
    game.enter(5).expect("Entry accepted");

    assert_eq!(game.submit(), SubmitVerdict::Incorrect);
    assert_eq!(game.status(), SudokuStatus::Playing, "Player can keep editing");
}

#[test]
fn test_submit_winning_grid() {
    let mut game = SudokuGame::new(sample_puzzle());
    fill_from_solution(&mut game);
    assert_eq!(game.conflict_count(), 0, "Solution entries never conflict");

    assert_eq!(game.submit(), SubmitVerdict::Won);
    assert_eq!(game.status(), SudokuStatus::Won);
}

#[test]
fn test_won_session_rejects_edits() {
    let mut game = SudokuGame::new(sample_puzzle());
    fill_from_solution(&mut game);
    assert_eq!(game.submit(), SubmitVerdict::Won);

    game.select(0, 2).expect("Cursor still moves");
    assert_eq!(game.enter(1), Err(PlayError::Finished));
    assert_eq!(game.clear(), Err(PlayError::Finished));
    assert_eq!(game.submit(), SubmitVerdict::Won, "Repeat submit stays Won");
}
