//! Front end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use santa_tictactoe::Santa;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shortest pause before Santa moves, in milliseconds.
    #[serde(default = "default_think_delay_min_ms")]
    think_delay_min_ms: u64,

    /// Random extra pause added on top of the minimum, in milliseconds.
    #[serde(default = "default_think_delay_jitter_ms")]
    think_delay_jitter_ms: u64,

    /// File receiving logs while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Fixed seed for Santa's choices; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_think_delay_min_ms() -> u64 {
    450
}

fn default_think_delay_jitter_ms() -> u64 {
    250
}

fn default_log_file() -> PathBuf {
    PathBuf::from("santa_games.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_delay_min_ms: default_think_delay_min_ms(),
            think_delay_jitter_ms: default_think_delay_jitter_ms(),
            log_file: default_log_file(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Draws Santa's pause: the minimum plus a uniform share of the jitter.
    pub fn think_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter = if self.think_delay_jitter_ms == 0 {
            0
        } else {
            rng.random_range(0..self.think_delay_jitter_ms)
        };
        Duration::from_millis(self.think_delay_min_ms.saturating_add(jitter))
    }

    /// Builds Santa, seeded when a seed is configured.
    pub fn santa(&self) -> Santa {
        match self.seed {
            Some(seed) => Santa::seeded(seed),
            None => Santa::from_os_rng(),
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
