//! Play-session bookkeeping: which puzzle is open and for how long.

use crate::api::CompletionReport;
use crate::games::{Difficulty, GameKind};
use chrono::NaiveDate;
use derive_getters::Getters;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Wall-clock timer for one play session.
///
/// The clock starts on the first player input, not when the screen
/// opens, so reading the puzzle costs nothing. Stopping freezes the
/// elapsed reading for result display and reporting.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayClock {
    started: Option<Instant>,
    frozen: Option<u64>,
}

impl PlayClock {
    /// Creates a stopped clock.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the clock; later calls have no effect.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
            debug!("Play clock started");
        }
    }

    /// Freezes the elapsed reading; later calls have no effect.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        if self.frozen.is_none() {
            self.frozen = Some(self.running_secs());
            debug!(elapsed = self.frozen, "Play clock stopped");
        }
    }

    /// Checks whether the clock has started.
    pub fn is_running(&self) -> bool {
        self.started.is_some() && self.frozen.is_none()
    }

    /// Whole seconds since the clock started, zero if it never did.
    ///
    /// After [`PlayClock::stop`] this keeps returning the frozen value.
    pub fn elapsed_secs(&self) -> u64 {
        self.frozen.unwrap_or_else(|| self.running_secs())
    }

    fn running_secs(&self) -> u64 {
        self.started.map(|t| t.elapsed().as_secs()).unwrap_or(0)
    }
}

/// One play session: puzzle identity, clock, and submission state.
#[derive(Debug, Clone, Getters)]
pub struct PlaySession {
    /// Game being played.
    game: GameKind,
    /// Requested difficulty tier.
    difficulty: Difficulty,
    /// Puzzle calendar date.
    date: NaiveDate,
    /// Backend puzzle id; `None` when playing a builtin puzzle offline.
    puzzle_id: Option<String>,
    /// Play timer.
    clock: PlayClock,
    /// Whether the completion event was already posted.
    submitted: bool,
}

impl PlaySession {
    /// Opens a session for one puzzle.
    #[instrument(skip(puzzle_id))]
    pub fn new(
        game: GameKind,
        difficulty: Difficulty,
        date: NaiveDate,
        puzzle_id: Option<String>,
    ) -> Self {
        info!(game = %game, difficulty = %difficulty, "Opening play session");
        Self {
            game,
            difficulty,
            date,
            puzzle_id,
            clock: PlayClock::new(),
            submitted: false,
        }
    }

    /// Returns the clock for starting and reading.
    pub fn clock_mut(&mut self) -> &mut PlayClock {
        &mut self.clock
    }

    /// Records that the completion event was posted.
    #[instrument(skip(self))]
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Builds the completion event for a won puzzle.
    ///
    /// Returns `None` for offline sessions, which have nothing to report.
    #[instrument(skip(self))]
    pub fn completion_report(&self) -> Option<CompletionReport> {
        self.puzzle_id
            .as_ref()
            .map(|id| CompletionReport::new(id.clone(), self.clock.elapsed_secs()))
    }
}
