//! Typed HTTP client for the portal backend.

use super::error::ApiError;
use super::types::{
    CompletionReport, DashboardSummary, DataEnvelope, PuzzleResponse, PuzzleRow, UserEnvelope,
    UserGameRow,
};
use crate::games::{Difficulty, GameKind};
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

/// Typed client for the portal's REST endpoints.
///
/// Credentials are a single opaque cookie string attached verbatim when
/// configured; obtaining it is the (external) auth provider's business.
#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    client: reqwest::Client,
    cookie: Option<String>,
}

impl PortalClient {
    /// Creates a client for the backend at `base_url`.
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(base_url: impl Into<String>, cookie: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            cookie,
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(cookie) = &self.cookie {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        builder
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.post(format!("{}{}", self.base_url, path));
        if let Some(cookie) = &self.cookie {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        builder
    }

    /// Lists the game names the backend serves.
    #[instrument(skip(self))]
    pub async fn list_games(&self) -> Result<Vec<String>, ApiError> {
        debug!("Listing games");
        let envelope: DataEnvelope<Vec<String>> =
            self.get("/game").send().await?.json().await?;
        Ok(envelope.data)
    }

    /// Fetches the most recently created puzzles across all games.
    #[instrument(skip(self))]
    pub async fn recent_puzzles(&self) -> Result<Vec<PuzzleRow>, ApiError> {
        debug!("Fetching recent puzzles");
        let envelope: DataEnvelope<Vec<PuzzleRow>> =
            self.get("/game/recent").send().await?.json().await?;
        Ok(envelope.data)
    }

    /// Fetches history rows for one game with limit/offset paging.
    #[instrument(skip(self))]
    pub async fn puzzles_by_name(
        &self,
        game: GameKind,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<PuzzleRow>, ApiError> {
        debug!("Fetching puzzles by name");
        let envelope: DataEnvelope<Vec<PuzzleRow>> = self
            .get(&format!("/game/{}", game.wire_name()))
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?
            .json()
            .await?;
        Ok(envelope.data)
    }

    /// Fetches history rows for one calendar date.
    #[instrument(skip(self))]
    pub async fn puzzles_by_date(&self, date: NaiveDate) -> Result<Vec<PuzzleRow>, ApiError> {
        debug!("Fetching puzzles by date");
        let envelope: DataEnvelope<Vec<PuzzleRow>> = self
            .get("/game/date/from")
            .query(&[("date", date.to_string())])
            .send()
            .await?
            .json()
            .await?;
        Ok(envelope.data)
    }

    /// Fetches one playable puzzle for a game, difficulty, and date.
    #[instrument(skip(self))]
    pub async fn fetch_puzzle(
        &self,
        game: GameKind,
        difficulty: Difficulty,
        date: NaiveDate,
    ) -> Result<PuzzleResponse, ApiError> {
        info!("Fetching puzzle");
        let response = self
            .get("/game/one")
            .query(&[
                ("game_name", game.wire_name().to_string()),
                ("difficulty", difficulty.wire_name().to_string()),
                ("date", date.to_string()),
            ])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::new(format!(
                "Puzzle fetch failed (status {}): {}",
                status, body
            )));
        }
        Ok(response.json().await?)
    }

    /// Posts the completion event for a won puzzle.
    ///
    /// The backend accepts each puzzle id once per user; a repeat
    /// submission comes back as a non-success status.
    #[instrument(skip(self), fields(id = %report.id()))]
    pub async fn submit_result(&self, report: &CompletionReport) -> Result<(), ApiError> {
        info!("Submitting completion");
        let response = self.post("/game/submit").json(report).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(format!(
                "Already submitted this puzzle (status {})",
                status
            )));
        }
        debug!("Completion accepted");
        Ok(())
    }

    /// Fetches the signed-in user's dashboard aggregates.
    #[instrument(skip(self))]
    pub async fn user_dashboard(&self) -> Result<DashboardSummary, ApiError> {
        debug!("Fetching dashboard");
        let envelope: UserEnvelope<DashboardSummary> =
            self.get("/user/dashboard").send().await?.json().await?;
        unwrap_user_envelope(envelope)
    }

    /// Fetches the signed-in user's recent play sessions.
    #[instrument(skip(self))]
    pub async fn user_recent(&self) -> Result<Vec<UserGameRow>, ApiError> {
        debug!("Fetching user history");
        let envelope: UserEnvelope<Vec<UserGameRow>> =
            self.get("/user/recent").send().await?.json().await?;
        unwrap_user_envelope(envelope)
    }
}

/// Unwraps a `{ success, data, error }` envelope into its payload.
fn unwrap_user_envelope<T>(envelope: UserEnvelope<T>) -> Result<T, ApiError> {
    if envelope.success
        && let Some(data) = envelope.data
    {
        return Ok(data);
    }
    let message = envelope
        .error
        .unwrap_or_else(|| "Backend reported failure".to_string());
    Err(ApiError::new(message))
}
