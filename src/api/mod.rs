//! REST collaborator: typed client, wire types, and errors.

mod client;
mod error;
mod types;

pub use client::PortalClient;
pub use error::ApiError;
pub use types::{
    CompletionReport, DashboardSummary, DataEnvelope, DifficultyCount, GameNameCount, PuzzleData,
    PuzzleResponse, PuzzleRow, UserEnvelope, UserGameRow,
};
