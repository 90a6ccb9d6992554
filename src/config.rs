//! Portal configuration: TOML file, environment, CLI overrides.

use crate::games::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the backend base URL.
pub const ENV_BASE_URL: &str = "PORTAL_BASE_URL";

/// Environment variable overriding the session cookie.
pub const ENV_COOKIE: &str = "PORTAL_COOKIE";

/// Configuration for the portal client.
///
/// Sources are layered: defaults, then the TOML file, then environment
/// variables, then CLI flags. Later sources win. No base URL (or the
/// `--offline` flag) puts the portal in offline mode with builtin
/// puzzles and no submission.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Backend base URL, e.g. `https://puzzles.example.com/api`.
    base_url: Option<String>,

    /// Session cookie attached verbatim to backend requests.
    cookie: Option<String>,

    /// Difficulty preselected in the lobby.
    #[serde(default)]
    default_difficulty: Difficulty,

    /// Rows per page when browsing history.
    #[serde(default = "default_page_size")]
    history_page_size: u32,
}

#[instrument]
fn default_page_size() -> u32 {
    10
}

impl PortalConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration from all sources.
    ///
    /// Precedence: CLI flag over environment over file over default.
    #[instrument(skip_all)]
    pub fn resolve(
        file: Option<&Path>,
        cli_base_url: Option<String>,
        offline: bool,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            debug!("Base URL taken from environment");
            config.base_url = Some(url);
        }
        if let Ok(cookie) = std::env::var(ENV_COOKIE) {
            debug!("Cookie taken from environment");
            config.cookie = Some(cookie);
        }
        if let Some(url) = cli_base_url {
            debug!("Base URL taken from CLI flag");
            config.base_url = Some(url);
        }
        if offline {
            info!("Offline mode requested, backend disabled");
            config.base_url = None;
        }

        Ok(config)
    }

    /// Checks whether the portal runs without a backend.
    #[instrument(skip(self))]
    pub fn is_offline(&self) -> bool {
        self.base_url.is_none()
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            cookie: None,
            default_difficulty: Difficulty::default(),
            history_page_size: default_page_size(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
