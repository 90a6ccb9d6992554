//! Command-line interface for puzzle_portal.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Puzzle Portal - terminal client for daily sudoku and wordle puzzles
#[derive(Parser, Debug)]
#[command(name = "puzzle_portal")]
#[command(about = "Terminal client for daily sudoku and wordle puzzles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the lobby TUI (game selection, play, dashboard, history)
    Lobby {
        /// Path to the portal config file
        #[arg(long, default_value = "portal.toml")]
        config: PathBuf,

        /// Backend base URL, overriding config file and environment
        #[arg(long)]
        base_url: Option<String>,

        /// Play builtin puzzles without a backend
        #[arg(long)]
        offline: bool,
    },

    /// Check a sudoku grid from a JSON file (9x9 matrix, 0 = empty)
    Check {
        /// Path to the grid JSON file
        grid: PathBuf,
    },

    /// Score a wordle guess against a target word
    Score {
        /// The guessed five-letter word
        guess: String,

        /// The target five-letter word
        target: String,
    },
}
