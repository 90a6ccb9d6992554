//! Multi-screen terminal lobby for the puzzle portal.
//!
//! The lobby is a state machine: each screen implements [`Screen`] and
//! returns a [`ScreenTransition`] from its key handler; the
//! [`LobbyController`] applies the transition, performing the backend
//! calls behind it so screens stay synchronous.

mod controller;
mod screen;
mod screens;

pub use controller::LobbyController;
pub use screen::{HistoryQuery, HistorySource, LobbyContext, Screen, ScreenTransition};
