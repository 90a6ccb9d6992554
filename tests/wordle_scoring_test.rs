//! Tests for the wordle guess scorer.

use puzzle_portal::LetterState::{Absent, Exact, Present};
use puzzle_portal::{GuessError, WORD_LEN, is_win, score_guess};

#[test]
fn test_disjoint_words_all_absent() {
    let states = score_guess("PLUMB", "CRANE").expect("Both words are five letters");
    assert_eq!(states, [Absent; WORD_LEN]);
}

#[test]
fn test_exact_and_present_mix() {
    // C is in TRACE but not at position 0; R, A, E sit exactly.
    let states = score_guess("CRANE", "TRACE").expect("Both words are five letters");
    assert_eq!(states, [Present, Exact, Exact, Absent, Exact]);
}

#[test]
fn test_duplicate_guess_letters_capped_by_target() {
    // ROBOT has two O's; BOOST's exact O claims one, the other is present.
    let states = score_guess("BOOST", "ROBOT").expect("Both words are five letters");
    assert_eq!(states, [Present, Exact, Present, Absent, Exact]);
}

#[test]
fn test_single_target_copy_not_double_counted() {
    // MAMMA has one target M to give; only the first unmatched M scores.
    let states = score_guess("MUMMY", "MADAM").expect("Both words are five letters");
    assert_eq!(states, [Exact, Absent, Present, Absent, Absent]);
}

#[test]
fn test_scoring_ignores_case() {
    let lower = score_guess("boost", "robot").expect("Both words are five letters");
    let upper = score_guess("BOOST", "ROBOT").expect("Both words are five letters");
    assert_eq!(lower, upper);
}

#[test]
fn test_empty_guess_rejected() {
    let err = score_guess("", "CRANE").expect_err("Empty guess must fail");
    assert_eq!(
        err,
        GuessError::WrongLength {
            expected: WORD_LEN,
            actual: 0
        }
    );
}

#[test]
fn test_short_target_rejected() {
    let err = score_guess("CRANE", "CAT").expect_err("Short target must fail");
    assert_eq!(
        err,
        GuessError::WrongLength {
            expected: WORD_LEN,
            actual: 3
        }
    );
}

#[test]
fn test_win_requires_full_match() {
    assert!(is_win("Crane", "cranE"));
    assert!(!is_win("CRANE", "CRATE"));
}
