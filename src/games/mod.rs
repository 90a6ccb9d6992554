//! Game implementations and shared game vocabulary.

pub mod sudoku;
pub mod wordle;

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// The games the portal can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    /// 9x9 number placement.
    #[default]
    Sudoku,
    /// Five-letter word guessing.
    Wordle,
}

impl GameKind {
    /// Returns the display label for this game.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sudoku => "Sudoku",
            Self::Wordle => "Wordle",
        }
    }

    /// Returns the name the backend uses for this game.
    #[instrument]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Sudoku => "sudoku",
            Self::Wordle => "wordle",
        }
    }

    /// Parses a backend game name, case-insensitively.
    #[instrument]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sudoku" => Some(Self::Sudoku),
            "wordle" => Some(Self::Wordle),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Puzzle difficulty tiers offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry tier.
    #[default]
    Easy,
    /// Middle tier.
    Medium,
    /// Top tier.
    Hard,
}

impl Difficulty {
    /// Returns the display label for this tier.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Returns the name the backend uses for this tier.
    #[instrument]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parses a backend difficulty name, case-insensitively.
    #[instrument]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Cycles to the next tier, wrapping after `Hard`.
    #[instrument]
    pub fn cycle(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
