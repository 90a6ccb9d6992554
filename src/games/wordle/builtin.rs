//! Builtin word lists for offline play.

use super::super::Difficulty;
use chrono::{Datelike, NaiveDate};

const EASY: [&str; 6] = ["APPLE", "HOUSE", "WATER", "BREAD", "LIGHT", "SMILE"];
const MEDIUM: [&str; 6] = ["CRANE", "GLOBE", "FROST", "SPICE", "BLEND", "CHARM"];
const HARD: [&str; 6] = ["AZURE", "KNOLL", "EPOXY", "QUIRK", "NYMPH", "WRYLY"];

/// Picks the builtin target word for a difficulty and date.
///
/// The pick is deterministic: the same date always yields the same word,
/// in the spirit of a daily puzzle.
pub fn sample_word(difficulty: Difficulty, date: NaiveDate) -> &'static str {
    let words = match difficulty {
        Difficulty::Easy => &EASY,
        Difficulty::Medium => &MEDIUM,
        Difficulty::Hard => &HARD,
    };
    words[date.ordinal() as usize % words.len()]
}
