//! Puzzle Portal - Unified CLI
//!
//! Terminal client for a daily-puzzle backend: play sudoku and wordle,
//! browse puzzle history, and track personal statistics.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use puzzle_portal::{
    Grid, LetterState, LobbyContext, LobbyController, PortalConfig, is_complete, is_correct,
    is_win, score_guess,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Lobby {
            config,
            base_url,
            offline,
        } => run_lobby(config, base_url, offline).await,
        Command::Check { grid } => run_check(grid),
        Command::Score { guess, target } => run_score(guess, target),
    }
}

/// Run the lobby TUI
#[instrument(skip_all, fields(config_path = %config.display()))]
async fn run_lobby(config: PathBuf, base_url: Option<String>, offline: bool) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("puzzle_portal.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Puzzle Portal lobby");

    let file = if config.exists() {
        Some(config.as_path())
    } else {
        info!(
            "Config file not found at {}, using defaults",
            config.display()
        );
        None
    };
    let portal_config = PortalConfig::resolve(file, base_url, offline)?;
    let context = LobbyContext::new(portal_config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = LobbyController::new(context);
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Lobby exited with error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Check a sudoku grid from a JSON file
#[instrument(skip_all, fields(grid_path = %grid.display()))]
fn run_check(grid: PathBuf) -> Result<()> {
    initialize_cli_tracing();

    let content = std::fs::read_to_string(&grid)
        .with_context(|| format!("Failed to read grid file {}", grid.display()))?;
    let grid: Grid =
        serde_json::from_str(&content).context("Grid file is not a 9x9 JSON matrix")?;

    if is_correct(&grid) {
        println!("Grid is complete and correct");
    } else if is_complete(&grid) {
        println!("Grid is complete but has errors");
    } else {
        println!("Grid is incomplete");
    }

    Ok(())
}

/// Score a wordle guess against a target word
#[instrument(skip_all)]
fn run_score(guess: String, target: String) -> Result<()> {
    initialize_cli_tracing();

    let marks = score_guess(&guess, &target)?;

    for (letter, mark) in guess.to_uppercase().chars().zip(marks.iter()) {
        let verdict = match mark {
            LetterState::Exact => "exact spot",
            LetterState::Present => "in the word, wrong spot",
            LetterState::Absent => "not in the word",
            LetterState::Empty => "unscored",
        };
        println!("{}  {}", letter, verdict);
    }

    if is_win(&guess, &target) {
        println!("Correct!");
    }

    Ok(())
}

/// Initialize stderr tracing for the one-shot subcommands
#[instrument]
fn initialize_cli_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
