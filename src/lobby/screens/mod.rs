//! Screen implementations for the lobby state machine.

mod dashboard;
mod game_select;
mod history;
mod sudoku_play;
mod wordle_play;

pub use dashboard::DashboardScreen;
pub use game_select::GameSelectScreen;
pub use history::HistoryScreen;
pub use sudoku_play::SudokuPlayScreen;
pub use wordle_play::WordlePlayScreen;
