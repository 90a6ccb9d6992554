//! Game selection screen: the lobby hub.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::games::{Difficulty, GameKind};
use crate::lobby::screen::{
    HistoryQuery, HistorySource, LobbyContext, Screen, ScreenTransition,
};

/// Menu entries in the game selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectEntry {
    Play(GameKind),
    Dashboard,
    History,
    Quit,
}

impl SelectEntry {
    fn label(self) -> String {
        match self {
            Self::Play(game) => format!("Play {}", game.label()),
            Self::Dashboard => "My Dashboard".to_string(),
            Self::History => "Puzzle History".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// State for the game selection screen.
#[derive(Debug, Getters)]
pub struct GameSelectScreen {
    #[getter(skip)]
    entries: Vec<SelectEntry>,
    list_state: ListState,
    difficulty: Difficulty,
    date: NaiveDate,
    date_input: Option<String>,
    notice: Option<String>,
}

impl GameSelectScreen {
    /// Creates the screen for the games the backend offers.
    #[instrument(skip(games, notice))]
    pub fn new(
        games: &[GameKind],
        difficulty: Difficulty,
        date: NaiveDate,
        notice: Option<String>,
    ) -> Self {
        debug!(game_count = games.len(), "Initializing GameSelectScreen");
        let mut entries: Vec<SelectEntry> = games.iter().map(|&g| SelectEntry::Play(g)).collect();
        entries.extend([SelectEntry::Dashboard, SelectEntry::History, SelectEntry::Quit]);

        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            entries,
            list_state: state,
            difficulty,
            date,
            date_input: None,
            notice,
        }
    }

    /// Moves selection up.
    #[instrument(skip(self))]
    fn select_previous(&mut self) {
        let count = self.entries.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    #[instrument(skip(self))]
    fn select_next(&mut self) {
        let count = self.entries.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected entry.
    #[instrument(skip(self))]
    fn selected_entry(&self) -> SelectEntry {
        let idx = self.list_state.selected().unwrap_or(0);
        self.entries[idx.min(self.entries.len() - 1)]
    }

    /// Handles a key while the date field is being edited.
    #[instrument(skip(self))]
    fn handle_date_key(&mut self, code: KeyCode) {
        let Some(buffer) = self.date_input.as_mut() else {
            return;
        };
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                if buffer.len() < 10 {
                    buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => match NaiveDate::parse_from_str(buffer, "%Y-%m-%d") {
                Ok(date) => {
                    info!(date = %date, "Puzzle date set");
                    self.date = date;
                    self.date_input = None;
                    self.notice = None;
                }
                Err(_) => {
                    warn!(input = %buffer, "Rejected malformed date");
                    self.notice = Some("Dates look like 2025-03-14".to_string());
                }
            },
            KeyCode::Esc => {
                self.date_input = None;
            }
            _ => {}
        }
    }
}

impl Screen for GameSelectScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &LobbyContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Puzzle Portal")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let settings_text = match &self.date_input {
            Some(buffer) => format!("Date: {}_  (Enter to confirm, Esc to cancel)", buffer),
            None => {
                let mode = if ctx.is_offline() { "offline" } else { "online" };
                format!(
                    "Difficulty: {}   Date: {}   Mode: {}",
                    self.difficulty.label(),
                    self.date,
                    mode
                )
            }
        };
        let settings_bar = Paragraph::new(settings_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(settings_bar, chunks[1]);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(entry.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[2], &mut list_state);

        let footer_text = match &self.notice {
            Some(notice) => notice.clone(),
            None => "↑↓: Navigate | Enter: Select | d: Difficulty | t: Date | q: Quit".to_string(),
        };
        let help = Paragraph::new(footer_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &LobbyContext) -> ScreenTransition {
        if self.date_input.is_some() {
            self.handle_date_key(key.code);
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.difficulty = self.difficulty.cycle();
                debug!(difficulty = %self.difficulty, "Difficulty cycled");
                ScreenTransition::Stay
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.date_input = Some(self.date.to_string());
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let entry = self.selected_entry();
                info!(entry = ?entry, "Lobby entry selected");
                match entry {
                    SelectEntry::Play(game) => ScreenTransition::GoToPlay {
                        game,
                        difficulty: self.difficulty,
                        date: self.date,
                    },
                    SelectEntry::Dashboard => ScreenTransition::GoToDashboard,
                    SelectEntry::History => ScreenTransition::GoToHistory {
                        query: HistoryQuery::first_page(HistorySource::Recent),
                    },
                    SelectEntry::Quit => ScreenTransition::Quit,
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
