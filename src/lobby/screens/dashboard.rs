//! Personal dashboard screen: aggregates and recent sessions.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};
use tracing::{debug, info, instrument};

use crate::api::{DashboardSummary, UserGameRow};
use crate::lobby::screen::{LobbyContext, Screen, ScreenTransition};

/// State for the dashboard screen.
///
/// All data is loaded by the controller before the screen is shown, so
/// rendering never touches the network.
#[derive(Debug, Getters)]
pub struct DashboardScreen {
    summary: Option<DashboardSummary>,
    recent: Vec<UserGameRow>,
    notice: Option<String>,
}

impl DashboardScreen {
    /// Creates the screen from prefetched dashboard data.
    #[instrument(skip_all)]
    pub fn new(
        summary: Option<DashboardSummary>,
        recent: Vec<UserGameRow>,
        notice: Option<String>,
    ) -> Self {
        debug!(
            has_summary = summary.is_some(),
            recent_count = recent.len(),
            "Initializing DashboardScreen"
        );
        Self {
            summary,
            recent,
            notice,
        }
    }

    /// Formats the per-game and per-difficulty counts as list lines.
    fn count_lines(&self) -> Vec<String> {
        let Some(summary) = &self.summary else {
            return Vec::new();
        };
        let mut lines = Vec::new();
        for row in summary.played_by_games_name() {
            let name = row.game_name().as_deref().unwrap_or("(unknown)");
            lines.push(format!("{}: {}", name, row.count()));
        }
        for row in summary.played_by_difficulty() {
            let tier = row.difficulty().as_deref().unwrap_or("(unknown)");
            lines.push(format!("{}: {}", tier, row.count()));
        }
        lines
    }
}

impl Screen for DashboardScreen {
    #[instrument(skip(self, frame, _ctx))]
    fn render(&self, frame: &mut Frame, _ctx: &LobbyContext) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(8),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("My Dashboard")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let summary_text = match &self.summary {
            Some(summary) => format!(
                "Points: {}   Average time: {:.1}s   Games played: {}",
                summary.points(),
                summary.avg_time(),
                summary.total_games_played()
            ),
            None => self
                .notice
                .clone()
                .unwrap_or_else(|| "No dashboard data".to_string()),
        };
        let summary_bar = Paragraph::new(summary_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Totals"));
        frame.render_widget(summary_bar, chunks[1]);

        let items: Vec<ListItem> = self
            .count_lines()
            .into_iter()
            .map(ListItem::new)
            .collect();
        let counts = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Plays by game and difficulty"),
        );
        frame.render_widget(counts, chunks[2]);

        let header = Row::new(vec![
            Cell::from("Game").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Difficulty").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Played").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Time (s)").style(Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(Style::default().fg(Color::Yellow));

        let rows: Vec<Row> = self
            .recent
            .iter()
            .take(20)
            .map(|session| {
                Row::new(vec![
                    Cell::from(session.game_name().as_str()),
                    Cell::from(session.difficulty().as_str()),
                    Cell::from(session.created_at().as_str()),
                    Cell::from(format!("{:.0}", session.time_taken())),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
            Constraint::Percentage(20),
        ];
        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Recent sessions"),
        );
        frame.render_widget(table, chunks[3]);

        let help = Paragraph::new("Esc / b: Back to lobby | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, _ctx))]
    fn handle_key(&mut self, key: KeyEvent, _ctx: &LobbyContext) -> ScreenTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                info!("Returning to game selection from dashboard");
                ScreenTransition::GoToGameSelect
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
