//! Puzzle history screen: recent, per-game, and per-date rows.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tracing::{debug, info, instrument, warn};

use crate::api::PuzzleRow;
use crate::games::GameKind;
use crate::lobby::screen::{
    HistoryQuery, HistorySource, LobbyContext, Screen, ScreenTransition,
};

/// State for the history screen.
///
/// Rows are loaded by the controller; paging and source switches go back
/// through it as [`ScreenTransition::GoToHistory`].
#[derive(Debug, Getters)]
pub struct HistoryScreen {
    query: HistoryQuery,
    rows: Vec<PuzzleRow>,
    page_size: u32,
    date_input: Option<String>,
    notice: Option<String>,
}

impl HistoryScreen {
    /// Creates the screen from prefetched rows.
    #[instrument(skip(rows, notice))]
    pub fn new(
        query: HistoryQuery,
        rows: Vec<PuzzleRow>,
        page_size: u32,
        notice: Option<String>,
    ) -> Self {
        debug!(row_count = rows.len(), "Initializing HistoryScreen");
        Self {
            query,
            rows,
            page_size,
            date_input: None,
            notice,
        }
    }

    /// Formats the current source for the header bar.
    fn source_label(&self) -> String {
        match self.query.source {
            HistorySource::Recent => "Most recent puzzles".to_string(),
            HistorySource::ByGame(game) => {
                let page = self.query.offset / self.page_size.max(1) + 1;
                format!("{} puzzles, page {}", game.label(), page)
            }
            HistorySource::ByDate(date) => format!("Puzzles on {}", date),
        }
    }

    /// Handles a key while the date field is being edited.
    #[instrument(skip(self))]
    fn handle_date_key(&mut self, code: KeyCode) -> ScreenTransition {
        let Some(buffer) = self.date_input.as_mut() else {
            return ScreenTransition::Stay;
        };
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                if buffer.len() < 10 {
                    buffer.push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                buffer.pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match NaiveDate::parse_from_str(buffer, "%Y-%m-%d") {
                Ok(date) => {
                    info!(date = %date, "History date chosen");
                    self.date_input = None;
                    ScreenTransition::GoToHistory {
                        query: HistoryQuery::first_page(HistorySource::ByDate(date)),
                    }
                }
                Err(_) => {
                    warn!(input = %buffer, "Rejected malformed date");
                    self.notice = Some("Dates look like 2025-03-14".to_string());
                    ScreenTransition::Stay
                }
            },
            KeyCode::Esc => {
                self.date_input = None;
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}

impl Screen for HistoryScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &LobbyContext) {
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

        let title = Paragraph::new("Puzzle History")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let source_text = match &self.date_input {
            Some(buffer) => format!("Date: {}_  (Enter to confirm, Esc to cancel)", buffer),
            None => self.source_label(),
        };
        let source_bar = Paragraph::new(source_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(source_bar, chunks[1]);

        let header = Row::new(vec![
            Cell::from("Game").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Difficulty").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Created").style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().fg(Color::Yellow));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.game_name().as_str()),
                    Cell::from(row.difficulty().as_str()),
                    Cell::from(row.created_at().as_str()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(45),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Puzzles"));
        frame.render_widget(table, chunks[2]);

        let footer_text = match &self.notice {
            Some(notice) => notice.clone(),
            None => {
                "r: Recent | s: Sudoku | w: Wordle | d: By date | n/p: Page | Esc: Back | q: Quit"
                    .to_string()
            }
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
            return self.handle_date_key(key.code);
        }

        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::GoToHistory {
                query: HistoryQuery::first_page(HistorySource::Recent),
            },
            KeyCode::Char('s') | KeyCode::Char('S') => ScreenTransition::GoToHistory {
                query: HistoryQuery::first_page(HistorySource::ByGame(GameKind::Sudoku)),
            },
            KeyCode::Char('w') | KeyCode::Char('W') => ScreenTransition::GoToHistory {
                query: HistoryQuery::first_page(HistorySource::ByGame(GameKind::Wordle)),
            },
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.date_input = Some(String::new());
                ScreenTransition::Stay
            }
            KeyCode::Char('n') | KeyCode::Char('N') => match self.query.source {
                HistorySource::ByGame(_) => {
                    let query = HistoryQuery {
                        source: self.query.source,
                        offset: self.query.offset + self.page_size,
                    };
                    info!(offset = query.offset, "Paging history forward");
                    ScreenTransition::GoToHistory { query }
                }
                _ => ScreenTransition::Stay,
            },
            KeyCode::Char('p') | KeyCode::Char('P') => match self.query.source {
                HistorySource::ByGame(_) if self.query.offset > 0 => {
                    let query = HistoryQuery {
                        source: self.query.source,
                        offset: self.query.offset.saturating_sub(self.page_size),
                    };
                    info!(offset = query.offset, "Paging history back");
                    ScreenTransition::GoToHistory { query }
                }
                _ => ScreenTransition::Stay,
            },
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                info!("Returning to game selection from history");
                ScreenTransition::GoToGameSelect
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
