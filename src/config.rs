//! Game configuration: board size and random seed.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest board a game may be configured with.
pub const MIN_BOARD_SIZE: usize = 1;
/// Largest board a game may be configured with.
pub const MAX_BOARD_SIZE: usize = 10;
/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// Settings for a single game.
///
/// Loaded from TOML, e.g.
///
/// ```toml
/// size = 7
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Width and height of the board.
    #[serde(default = "default_size")]
    size: usize,

    /// Seed for the board generator. Drawn from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration, validating the board size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `size` is outside 1-10.
    #[track_caller]
    #[instrument]
    pub fn new(size: usize, seed: Option<u64>) -> Result<Self, ConfigError> {
        Self { size, seed }.validated()
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        let config = config.validated()?;
        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the board size if one is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the new size is outside 1-10.
    #[track_caller]
    pub fn with_size(self, size: Option<usize>) -> Result<Self, ConfigError> {
        match size {
            Some(size) => Self { size, ..self }.validated(),
            None => Ok(self),
        }
    }

    /// Replaces the seed if one is given.
    pub fn with_seed(self, seed: Option<u64>) -> Self {
        Self {
            seed: seed.or(self.seed),
            ..self
        }
    }

    #[track_caller]
    fn validated(self) -> Result<Self, ConfigError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            Ok(self)
        } else {
            Err(ConfigError::new(format!(
                "Board size must be an integer between {} & {} inclusive, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.size
            )))
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
