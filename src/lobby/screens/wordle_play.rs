//! Wordle play screen.

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

use crate::games::wordle::{GuessVerdict, LetterState, MAX_GUESSES, WordleGame, WordleStatus};
use crate::lobby::screen::{LobbyContext, Screen, ScreenTransition};
use crate::session::PlaySession;

/// State for the Wordle play screen.
#[derive(Debug, Getters)]
pub struct WordlePlayScreen {
    session: PlaySession,
    game: WordleGame,
    notice: Option<String>,
}

impl WordlePlayScreen {
    /// Creates the screen for one puzzle.
    #[instrument(skip_all)]
    pub fn new(session: PlaySession, game: WordleGame) -> Self {
        debug!("Initializing WordlePlayScreen");
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

    /// Builds the styled tile lines.
    fn board_lines(&self) -> Vec<Line<'static>> {
        self.game
            .rows()
            .iter()
            .map(|row| {
                let mut spans = Vec::new();
                for (i, tile) in row.iter().enumerate() {
                    let text = match tile.letter {
                        Some(letter) => format!(" {} ", letter),
                        None => " . ".to_string(),
                    };
                    let style = match tile.state {
                        LetterState::Exact => Style::default()
                            .bg(Color::Green)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                        LetterState::Present => Style::default()
                            .bg(Color::Yellow)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                        LetterState::Absent => {
                            Style::default().bg(Color::DarkGray).fg(Color::White)
                        }
                        LetterState::Empty if tile.letter.is_some() => Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                        LetterState::Empty => Style::default().fg(Color::DarkGray),
                    };
                    spans.push(Span::styled(text, style));
                    if i < row.len() - 1 {
                        spans.push(Span::raw(" "));
                    }
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl Screen for WordlePlayScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &LobbyContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Wordle")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let (status_text, status_color) = match self.game.status() {
            WordleStatus::Won => (
                format!(
                    "Got it in {} of {} guesses, {}s",
                    self.game.current_row() + 1,
                    MAX_GUESSES,
                    self.session.clock().elapsed_secs()
                ),
                Color::Green,
            ),
            WordleStatus::Lost => (
                format!("Out of guesses. The word was {}", self.game.target()),
                Color::Red,
            ),
            WordleStatus::Playing => (
                format!(
                    "{} | {} | Time: {}s | Guess {}/{}",
                    self.session.difficulty().label(),
                    self.session.date(),
                    self.session.clock().elapsed_secs(),
                    self.game.current_row() + 1,
                    MAX_GUESSES
                ),
                Color::Yellow,
            ),
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
            None => "A-Z: Type | Backspace: Erase | Enter: Guess | Esc: Back".to_string(),
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
            KeyCode::Esc => {
                info!("Leaving wordle session");
                ScreenTransition::GoToGameSelect
            }
            KeyCode::Backspace => {
                // Erasing on a finished board is a no-op, not an error worth showing.
                let _ = self.game.backspace();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.game.submit_guess() {
                Ok(GuessVerdict::NotEnoughLetters) => {
                    self.notice = Some("Not enough letters".to_string());
                    ScreenTransition::Stay
                }
                Ok(GuessVerdict::Continue) => {
                    self.notice = None;
                    ScreenTransition::Stay
                }
                Ok(GuessVerdict::Won) => {
                    info!("Wordle solved");
                    ScreenTransition::SubmitCompletion
                }
                Ok(GuessVerdict::Lost) => {
                    info!("Wordle lost");
                    self.session.clock_mut().stop();
                    ScreenTransition::Stay
                }
                Err(err) => {
                    self.notice = Some(err.to_string());
                    ScreenTransition::Stay
                }
            },
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.game.status() == WordleStatus::Playing {
                    match self.game.type_letter(c) {
                        Ok(()) => {
                            self.session.clock_mut().start();
                            self.notice = None;
                        }
                        Err(err) => self.notice = Some(err.to_string()),
                    }
                    return ScreenTransition::Stay;
                }
                // Letters double as navigation once the board is closed.
                match c {
                    'q' | 'Q' => ScreenTransition::Quit,
                    'b' | 'B' => ScreenTransition::GoToGameSelect,
                    _ => ScreenTransition::Stay,
                }
            }
            _ => ScreenTransition::Stay,
        }
    }
}
