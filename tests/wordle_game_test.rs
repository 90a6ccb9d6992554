//! Tests for the interactive wordle session.

use puzzle_portal::{
    GuessError, GuessVerdict, LetterState, MAX_GUESSES, WORD_LEN, WordleGame, WordleStatus,
};

/// Types a full word into the current row.
fn type_word(game: &mut WordleGame, word: &str) {
    for letter in word.chars() {
        game.type_letter(letter).expect("Letter should be accepted");
    }
}

#[test]
fn test_new_session_starts_blank() {
    let game = WordleGame::new("crane").expect("Five-letter target");
    assert_eq!(game.target(), "CRANE", "Target is uppercased");
    assert_eq!(game.current_row(), 0);
    assert_eq!(game.current_col(), 0);
    assert_eq!(game.status(), WordleStatus::Playing);
    for row in game.rows() {
        for tile in row {
            assert_eq!(tile.letter, None);
            assert_eq!(tile.state, LetterState::Empty);
        }
    }
}

#[test]
fn test_new_rejects_bad_targets() {
    assert_eq!(
        WordleGame::new("cat").unwrap_err(),
        GuessError::WrongLength {
            expected: WORD_LEN,
            actual: 3
        }
    );
    assert_eq!(
        WordleGame::new("cr4ne").unwrap_err(),
        GuessError::NotALetter('4')
    );
}

#[test]
fn test_typing_fills_current_row() {
    let mut game = WordleGame::new("CRANE").expect("Five-letter target");
    type_word(&mut game, "tr");
    assert_eq!(game.current_col(), 2);
    assert_eq!(game.rows()[0][0].letter, Some('T'), "Letters are uppercased");
    assert_eq!(game.rows()[0][1].letter, Some('R'));
    assert_eq!(game.rows()[0][2].letter, None);
}

#[test]
fn test_full_row_rejects_sixth_letter() {
    let mut game = WordleGame::new("CRANE").expect("Five-letter target");
    type_word(&mut game, "PLUMB");
    assert_eq!(game.type_letter('S'), Err(GuessError::RowFull));
}

#[test]
fn test_non_letter_rejected() {
    let mut game = WordleGame::new("CRANE").expect("Five-letter target");
    assert_eq!(game.type_letter('1'), Err(GuessError::NotALetter('1')));
    assert_eq!(game.current_col(), 0);
}

#[test]
fn test_backspace_removes_last_letter() {
    let mut game = WordleGame::new("CRANE").expect("Five-letter target");
    type_word(&mut game, "tra");
    game.backspace().expect("Backspace accepted");
    assert_eq!(game.current_col(), 2);
    assert_eq!(game.rows()[0][2].letter, None);

    // Backspace on an empty row is a quiet no-op.
    game.backspace().expect("Backspace accepted");
    game.backspace().expect("Backspace accepted");
    game.backspace().expect("Backspace accepted");
    assert_eq!(game.current_col(), 0);
}

#[test]
fn test_submit_short_row_keeps_board() {
    let mut game = WordleGame::new("CRANE").expect("Five-letter target");
    type_word(&mut game, "tra");
    let verdict = game.submit_guess().expect("Submit allowed while playing");
    assert_eq!(verdict, GuessVerdict::NotEnoughLetters);
    assert_eq!(game.current_row(), 0, "Row does not advance");
    assert_eq!(game.current_col(), 3, "Typed letters stay");
}

#[test]
fn test_scored_row_advances() {
    let mut game = WordleGame::new("TRACE").expect("Five-letter target");
    type_word(&mut game, "CRANE");
    let verdict = game.submit_guess().expect("Submit allowed while playing");
    assert_eq!(verdict, GuessVerdict::Continue);
    assert_eq!(game.current_row(), 1);
    assert_eq!(game.current_col(), 0);

    use LetterState::{Absent, Exact, Present};
    let states: Vec<LetterState> = game.rows()[0].iter().map(|tile| tile.state).collect();
    assert_eq!(states, vec![Present, Exact, Exact, Absent, Exact]);
}

#[test]
fn test_win_on_matching_guess() {
    let mut game = WordleGame::new("crane").expect("Five-letter target");
    type_word(&mut game, "crane");
    let verdict = game.submit_guess().expect("Submit allowed while playing");
    assert_eq!(verdict, GuessVerdict::Won);
    assert_eq!(game.status(), WordleStatus::Won);
    assert_eq!(game.rows()[0].map(|tile| tile.state), [LetterState::Exact; WORD_LEN]);
}

#[test]
fn test_won_session_rejects_input() {
    let mut game = WordleGame::new("CRANE").expect("Five-letter target");
    type_word(&mut game, "CRANE");
    game.submit_guess().expect("Submit allowed while playing");

    assert_eq!(game.type_letter('A'), Err(GuessError::Finished));
    assert_eq!(game.backspace(), Err(GuessError::Finished));
    assert_eq!(game.submit_guess(), Err(GuessError::Finished));
}

#[test]
fn test_six_misses_lose_and_reveal_target() {
    let mut game = WordleGame::new("CRANE").expect("Five-letter target");
    for row in 0..MAX_GUESSES {
        type_word(&mut game, "PLUMB");
        let verdict = game.submit_guess().expect("Submit allowed while playing");
        if row < MAX_GUESSES - 1 {
            assert_eq!(verdict, GuessVerdict::Continue);
        } else {
            assert_eq!(verdict, GuessVerdict::Lost);
        }
    }
    assert_eq!(game.status(), WordleStatus::Lost);
    assert_eq!(game.target(), "CRANE", "Target is readable for the reveal");
    assert_eq!(game.type_letter('A'), Err(GuessError::Finished));
}

#[test]
fn test_win_leaves_later_rows_blank() {
    let mut game = WordleGame::new("CRANE").expect("Five-letter target");
    type_word(&mut game, "PLUMB");
    game.submit_guess().expect("Submit allowed while playing");
    type_word(&mut game, "CRANE");
    let verdict = game.submit_guess().expect("Submit allowed while playing");
    assert_eq!(verdict, GuessVerdict::Won);
    assert_eq!(game.current_row(), 1, "Winning row stays current");
    for row in &game.rows()[2..] {
        for tile in row {
            assert_eq!(tile.state, LetterState::Empty);
        }
    }
}
