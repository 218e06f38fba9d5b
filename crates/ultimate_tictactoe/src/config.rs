//! Application configuration for the `uttt` driver.

use crate::driver::MatchMode;
use crate::search::{DEFAULT_DEPTH, Evaluation};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a terminal session, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Who plays against whom.
    #[serde(default)]
    mode: MatchMode,

    /// Plies searched below each candidate by the hard computer.
    #[serde(default = "default_search_depth")]
    search_depth: u32,

    /// Seed for the computer's random source; entropy if unset.
    #[serde(default)]
    seed: Option<u64>,

    /// Leaf evaluation for the hard computer.
    #[serde(default)]
    evaluation: Evaluation,

    /// Refresh sub-board outcomes during the hard computer's look-ahead.
    #[serde(default)]
    track_outcomes: bool,
}

fn default_search_depth() -> u32 {
    DEFAULT_DEPTH
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            search_depth: default_search_depth(),
            seed: None,
            evaluation: Evaluation::default(),
            track_outcomes: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(mode = %config.mode, depth = config.search_depth, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the match mode.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the search depth.
    pub fn with_search_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the evaluation.
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Overrides outcome tracking during look-ahead.
    pub fn with_track_outcomes(mut self, track_outcomes: bool) -> Self {
        self.track_outcomes = track_outcomes;
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
