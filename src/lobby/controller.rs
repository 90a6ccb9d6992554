//! Lobby controller: the state machine driving the multi-screen TUI.

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use strum::IntoEnumIterator;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::api::PuzzleData;
use crate::games::sudoku::{self, SudokuGame};
use crate::games::wordle::{self, WordleGame};
use crate::games::{Difficulty, GameKind};
use crate::lobby::screen::{
    HistoryQuery, HistorySource, LobbyContext, Screen, ScreenTransition,
};
use crate::lobby::screens::{
    DashboardScreen, GameSelectScreen, HistoryScreen, SudokuPlayScreen, WordlePlayScreen,
};
use crate::session::PlaySession;

/// Active screen in the lobby state machine.
#[derive(Debug)]
enum ActiveScreen {
    GameSelect(GameSelectScreen),
    Dashboard(DashboardScreen),
    History(HistoryScreen),
    SudokuPlay(SudokuPlayScreen),
    WordlePlay(WordlePlayScreen),
}

/// Controller that drives the lobby state machine.
///
/// Call [`LobbyController::run`] to start the event loop. Screens stay
/// synchronous; every backend call happens here, on the transitions
/// that need one.
#[derive(Debug)]
pub struct LobbyController {
    context: LobbyContext,
    games: Vec<GameKind>,
    difficulty: Difficulty,
    date: NaiveDate,
}

impl LobbyController {
    /// Creates a new lobby controller.
    #[instrument(skip(context))]
    pub fn new(context: LobbyContext) -> Self {
        info!(offline = context.is_offline(), "Creating LobbyController");
        let difficulty = *context.config().default_difficulty();
        Self {
            context,
            games: Vec::new(),
            difficulty,
            date: chrono::Local::now().date_naive(),
        }
    }

    /// Runs the lobby event loop until the user quits.
    ///
    /// Drives screen transitions and performs the backend calls behind
    /// them; the caller owns terminal setup and teardown.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend + std::io::Write>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting lobby event loop");

        self.games = self.load_games().await;
        let mut screen = ActiveScreen::GameSelect(self.game_select(None));

        loop {
            terminal.draw(|f| match &screen {
                ActiveScreen::GameSelect(s) => s.render(f, &self.context),
                ActiveScreen::Dashboard(s) => s.render(f, &self.context),
                ActiveScreen::History(s) => s.render(f, &self.context),
                ActiveScreen::SudokuPlay(s) => s.render(f, &self.context),
                ActiveScreen::WordlePlay(s) => s.render(f, &self.context),
            })?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::GameSelect(s) => s.handle_key(key, &self.context),
                    ActiveScreen::Dashboard(s) => s.handle_key(key, &self.context),
                    ActiveScreen::History(s) => s.handle_key(key, &self.context),
                    ActiveScreen::SudokuPlay(s) => s.handle_key(key, &self.context),
                    ActiveScreen::WordlePlay(s) => s.handle_key(key, &self.context),
                };

                // Keep difficulty and date choices across navigation.
                if let ActiveScreen::GameSelect(s) = &screen {
                    self.difficulty = *s.difficulty();
                    self.date = *s.date();
                }

                match transition {
                    ScreenTransition::Stay => {}
                    ScreenTransition::GoToGameSelect => {
                        info!("Navigating to GameSelect");
                        screen = ActiveScreen::GameSelect(self.game_select(None));
                    }
                    ScreenTransition::GoToDashboard => {
                        info!("Navigating to Dashboard");
                        screen = ActiveScreen::Dashboard(self.open_dashboard().await);
                    }
                    ScreenTransition::GoToHistory { query } => {
                        info!(query = ?query, "Navigating to History");
                        screen = ActiveScreen::History(self.open_history(query).await);
                    }
                    ScreenTransition::GoToPlay {
                        game,
                        difficulty,
                        date,
                    } => {
                        info!(game = %game, difficulty = %difficulty, "Starting play session");
                        screen = self.open_play(game, difficulty, date).await;
                    }
                    ScreenTransition::SubmitCompletion => {
                        self.handle_completion(&mut screen).await;
                    }
                    ScreenTransition::Quit => {
                        info!("Lobby quitting");
                        return Ok(());
                    }
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Loads the game list from the backend, falling back to builtins.
    #[instrument(skip(self))]
    async fn load_games(&self) -> Vec<GameKind> {
        let Some(client) = self.context.client() else {
            debug!("Offline, using builtin game list");
            return GameKind::iter().collect();
        };
        match client.list_games().await {
            Ok(names) => {
                let games: Vec<GameKind> = names
                    .iter()
                    .filter_map(|name| GameKind::from_wire(name))
                    .collect();
                if games.is_empty() {
                    warn!("Backend listed no known games, using builtin list");
                    GameKind::iter().collect()
                } else {
                    info!(count = games.len(), "Game list loaded");
                    games
                }
            }
            Err(err) => {
                warn!(error = %err, "Game list fetch failed, using builtin list");
                GameKind::iter().collect()
            }
        }
    }

    /// Builds a game selection screen with the current lobby settings.
    #[instrument(skip(self, notice))]
    fn game_select(&self, notice: Option<String>) -> GameSelectScreen {
        GameSelectScreen::new(&self.games, self.difficulty, self.date, notice)
    }

    /// Loads dashboard data and builds the dashboard screen.
    #[instrument(skip(self))]
    async fn open_dashboard(&self) -> DashboardScreen {
        let Some(client) = self.context.client() else {
            return DashboardScreen::new(
                None,
                Vec::new(),
                Some("Offline mode: dashboard unavailable".to_string()),
            );
        };
        let summary = client.user_dashboard().await;
        let recent = client.user_recent().await;
        match (summary, recent) {
            (Ok(summary), Ok(recent)) => DashboardScreen::new(Some(summary), recent, None),
            (Ok(summary), Err(err)) => {
                warn!(error = %err, "User history fetch failed");
                DashboardScreen::new(Some(summary), Vec::new(), Some(err.message))
            }
            (Err(err), _) => {
                warn!(error = %err, "Dashboard fetch failed");
                DashboardScreen::new(None, Vec::new(), Some(err.message))
            }
        }
    }

    /// Loads history rows and builds the history screen.
    #[instrument(skip(self))]
    async fn open_history(&self, query: HistoryQuery) -> HistoryScreen {
        let page_size = *self.context.config().history_page_size();
        let Some(client) = self.context.client() else {
            return HistoryScreen::new(
                query,
                Vec::new(),
                page_size,
                Some("Offline mode: history unavailable".to_string()),
            );
        };
        let result = match query.source {
            HistorySource::Recent => client.recent_puzzles().await,
            HistorySource::ByGame(game) => {
                client.puzzles_by_name(game, page_size, query.offset).await
            }
            HistorySource::ByDate(date) => client.puzzles_by_date(date).await,
        };
        match result {
            Ok(rows) => HistoryScreen::new(query, rows, page_size, None),
            Err(err) => {
                warn!(error = %err, "History fetch failed");
                HistoryScreen::new(query, Vec::new(), page_size, Some(err.message))
            }
        }
    }

    /// Fetches (or picks builtin) puzzle data and opens the play screen.
    ///
    /// Fetch or payload-shape failures land back on the selection screen
    /// with the error in the footer.
    #[instrument(skip(self))]
    async fn open_play(
        &self,
        game: GameKind,
        difficulty: Difficulty,
        date: NaiveDate,
    ) -> ActiveScreen {
        let Some(client) = self.context.client() else {
            info!("Opening builtin puzzle");
            return self.builtin_play(game, difficulty, date);
        };

        let puzzle = match client.fetch_puzzle(game, difficulty, date).await {
            Ok(puzzle) => puzzle,
            Err(err) => {
                warn!(error = %err, "Puzzle fetch failed");
                return ActiveScreen::GameSelect(self.game_select(Some(err.message)));
            }
        };

        let session = PlaySession::new(game, difficulty, date, Some(puzzle.id().clone()));
        match (game, puzzle.data()) {
            (GameKind::Sudoku, PuzzleData::Grid(grid)) => {
                ActiveScreen::SudokuPlay(SudokuPlayScreen::new(session, SudokuGame::new(*grid)))
            }
            (GameKind::Wordle, PuzzleData::Word(word)) => match WordleGame::new(word) {
                Ok(wordle_game) => {
                    ActiveScreen::WordlePlay(WordlePlayScreen::new(session, wordle_game))
                }
                Err(err) => {
                    warn!(error = %err, "Backend sent an unplayable word");
                    ActiveScreen::GameSelect(
                        self.game_select(Some(format!("Bad puzzle word: {}", err))),
                    )
                }
            },
            _ => {
                warn!("Puzzle payload did not match the requested game");
                ActiveScreen::GameSelect(self.game_select(Some(
                    "Puzzle payload did not match the requested game".to_string(),
                )))
            }
        }
    }

    /// Opens a play screen backed by a builtin puzzle.
    #[instrument(skip(self))]
    fn builtin_play(&self, game: GameKind, difficulty: Difficulty, date: NaiveDate) -> ActiveScreen {
        let session = PlaySession::new(game, difficulty, date, None);
        match game {
            GameKind::Sudoku => ActiveScreen::SudokuPlay(SudokuPlayScreen::new(
                session,
                SudokuGame::new(sudoku::sample_puzzle()),
            )),
            GameKind::Wordle => match WordleGame::new(wordle::sample_word(difficulty, date)) {
                Ok(wordle_game) => {
                    ActiveScreen::WordlePlay(WordlePlayScreen::new(session, wordle_game))
                }
                Err(err) => {
                    warn!(error = %err, "Builtin word rejected");
                    ActiveScreen::GameSelect(
                        self.game_select(Some(format!("Builtin puzzle broken: {}", err))),
                    )
                }
            },
        }
    }

    /// Posts the completion event for the play screen that just won.
    #[instrument(skip(self, screen))]
    async fn handle_completion(&self, screen: &mut ActiveScreen) {
        match screen {
            ActiveScreen::SudokuPlay(s) => {
                let notice = self.submit_completion(s.session_mut()).await;
                s.set_notice(Some(notice));
            }
            ActiveScreen::WordlePlay(s) => {
                let notice = self.submit_completion(s.session_mut()).await;
                s.set_notice(Some(notice));
            }
            _ => debug!("Completion requested outside a play screen"),
        }
    }

    /// Submits a won session's result and describes the outcome.
    #[instrument(skip_all)]
    async fn submit_completion(&self, session: &mut PlaySession) -> String {
        session.clock_mut().stop();
        if *session.submitted() {
            return "Result already recorded".to_string();
        }
        let Some(report) = session.completion_report() else {
            return format!(
                "Solved in {}s (offline, result not recorded)",
                session.clock().elapsed_secs()
            );
        };
        let Some(client) = self.context.client() else {
            return format!(
                "Solved in {}s (offline, result not recorded)",
                session.clock().elapsed_secs()
            );
        };
        match client.submit_result(&report).await {
            Ok(()) => {
                session.mark_submitted();
                format!("Result recorded: {}s", report.elapsed_seconds())
            }
            Err(err) => {
                warn!(error = %err, "Completion submit failed");
                err.message
            }
        }
    }
}
