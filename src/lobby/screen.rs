//! Screen trait, shared context, and transition type for the lobby.

use crate::api::PortalClient;
use crate::config::PortalConfig;
use crate::games::{Difficulty, GameKind};
use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use derive_getters::Getters;
use ratatui::Frame;
use tracing::instrument;

/// Shared read-only context handed to every screen.
///
/// Screens read configuration and connectivity from here; the client is
/// `None` when the portal runs offline.
#[derive(Debug, Getters)]
pub struct LobbyContext {
    config: PortalConfig,
    client: Option<PortalClient>,
}

impl LobbyContext {
    /// Builds the context from resolved configuration.
    #[instrument(skip(config))]
    pub fn new(config: PortalConfig) -> Self {
        let client = config
            .base_url()
            .as_ref()
            .map(|url| PortalClient::new(url.clone(), config.cookie().clone()));
        Self { config, client }
    }

    /// Checks whether the portal runs without a backend.
    pub fn is_offline(&self) -> bool {
        self.client.is_none()
    }
}

/// Where the history screen gets its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistorySource {
    /// Most recent puzzles across all games.
    Recent,
    /// Rows for one game, paged with limit/offset.
    ByGame(GameKind),
    /// Rows for one calendar date.
    ByDate(NaiveDate),
}

/// A history request: row source plus paging offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Where the rows come from.
    pub source: HistorySource,
    /// Rows to skip; only honored for by-game queries.
    pub offset: u32,
}

impl HistoryQuery {
    /// Builds the initial query for a source.
    pub fn first_page(source: HistorySource) -> Self {
        Self { source, offset: 0 }
    }
}

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`LobbyController`](crate::LobbyController) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen, no state change.
    Stay,
    /// Navigate to the game selection screen.
    GoToGameSelect,
    /// Navigate to the personal dashboard.
    GoToDashboard,
    /// Navigate to (or repage) the history browser.
    GoToHistory {
        /// Rows to load.
        query: HistoryQuery,
    },
    /// Start a play session for one puzzle.
    GoToPlay {
        /// Game to play.
        game: GameKind,
        /// Requested difficulty tier.
        difficulty: Difficulty,
        /// Puzzle calendar date.
        date: NaiveDate,
    },
    /// Post the completion event for the puzzle just won.
    SubmitCompletion,
    /// Exit the lobby application cleanly.
    Quit,
}

/// Trait implemented by each screen in the lobby state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, ctx: &LobbyContext);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &LobbyContext) -> ScreenTransition;
}
