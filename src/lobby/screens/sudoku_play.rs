//! Sudoku play screen.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::games::sudoku::{
    BOX_SIZE, EMPTY_CELL, GRID_SIZE, MoveDir, SubmitVerdict, SudokuGame, SudokuStatus,
};
use crate::lobby::screen::{LobbyContext, Screen, ScreenTransition};
use crate::session::PlaySession;

/// State for the Sudoku play screen.
#[derive(Debug, Getters)]
pub struct SudokuPlayScreen {
    session: PlaySession,
    game: SudokuGame,
    notice: Option<String>,
}

impl SudokuPlayScreen {
    /// Creates the screen for one puzzle.
    #[instrument(skip_all)]
    pub fn new(session: PlaySession, game: SudokuGame) -> Self {
        debug!("Initializing SudokuPlayScreen");
        Self {
            session,
            game,
            notice: None,
        }
    }

    /// Returns the session for clock and submission bookkeeping.
    pub fn session_mut(&mut self) -> &mut PlaySession {
        &mut self.session
    }

    /// Replaces the footer notice.
    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }

    /// Builds the styled board lines, with box separators.
    fn board_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for row in 0..GRID_SIZE {
            let mut spans = Vec::new();
            for col in 0..GRID_SIZE {
                let value = self.game.working().get(row, col).unwrap_or(EMPTY_CELL);
                let text = if value == EMPTY_CELL {
                    " . ".to_string()
                } else {
                    format!(" {} ", value)
                };

                let base_style = if self.game.is_given(row, col) {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else if self.game.is_conflict(row, col) {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else if value == EMPTY_CELL {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Blue)
                };
                let style = if (row, col) == self.game.cursor() {
                    base_style.bg(Color::White).fg(Color::Black)
                } else {
                    base_style
                };

                spans.push(Span::styled(text, style));
                if col % BOX_SIZE == BOX_SIZE - 1 && col < GRID_SIZE - 1 {
                    spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                }
            }
            lines.push(Line::from(spans));
            if row % BOX_SIZE == BOX_SIZE - 1 && row < GRID_SIZE - 1 {
                lines.push(Line::from(Span::styled(
                    "─────────┼─────────┼─────────",
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines
    }
}

impl Screen for SudokuPlayScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &LobbyContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(13),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Sudoku")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let status_text = match self.game.status() {
            SudokuStatus::Won => format!(
                "Solved in {}s",
                self.session.clock().elapsed_secs()
            ),
            SudokuStatus::Playing => format!(
                "{} | {} | Time: {}s | Conflicts: {}",
                self.session.difficulty().label(),
                self.session.date(),
                self.session.clock().elapsed_secs(),
                self.game.conflict_count()
            ),
        };
        let status_color = match self.game.status() {
            SudokuStatus::Won => Color::Green,
            SudokuStatus::Playing => Color::Yellow,
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[1]);

        let board = Paragraph::new(self.board_lines())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(board, chunks[2]);

        let footer_text = match &self.notice {
            Some(notice) => notice.clone(),
            None => "↑↓←→: Move | 1-9: Fill | 0/Del: Clear | Enter: Check | Esc: Back | q: Quit"
                .to_string(),
        };
        let help = Paragraph::new(footer_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &LobbyContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.game.move_cursor(MoveDir::Up);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.game.move_cursor(MoveDir::Down);
                ScreenTransition::Stay
            }
            KeyCode::Left => {
                self.game.move_cursor(MoveDir::Left);
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                self.game.move_cursor(MoveDir::Right);
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                let digit = c as u8 - b'0';
                match self.game.enter(digit) {
                    Ok(()) => {
                        self.session.clock_mut().start();
                        self.notice = None;
                    }
                    Err(err) => self.notice = Some(err.to_string()),
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('0') | KeyCode::Backspace | KeyCode::Delete => {
                match self.game.clear() {
                    Ok(()) => self.notice = None,
                    Err(err) => self.notice = Some(err.to_string()),
                }
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let verdict = self.game.submit();
                info!(verdict = ?verdict, "Sudoku grid checked");
                match verdict {
                    SubmitVerdict::Incomplete => {
                        self.notice = Some("The grid is not complete yet".to_string());
                        ScreenTransition::Stay
                    }
                    SubmitVerdict::Incorrect => {
                        self.notice = Some("Something is off, keep looking".to_string());
                        ScreenTransition::Stay
                    }
                    SubmitVerdict::Won => ScreenTransition::SubmitCompletion,
                }
            }
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                info!("Leaving sudoku session");
                ScreenTransition::GoToGameSelect
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
