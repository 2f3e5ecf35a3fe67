//! Portal configuration.
//!
//! `PortalConfig` combines the per-game configs with the session seed. It is
//! plain serde data: the binary loads it from a JSON file, tests build it
//! with the `with_*` methods.
//!
//! ```
//! use game_portal::core::PortalConfig;
//!
//! let config = PortalConfig::from_json_str(r#"{ "seed": 9, "snake": { "cell_size": 10 } }"#).unwrap();
//! assert_eq!(config.seed, Some(9));
//! assert_eq!(config.snake.columns(), 40);
//! assert_eq!(config.tictactoe.computer_delay_ms, 500);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{PortalError, Result};
use crate::games::snake::SnakeConfig;
use crate::games::tictactoe::TicTacToeConfig;

/// Complete portal configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Session seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Snake playfield and pacing.
    pub snake: SnakeConfig,

    /// Tic-Tac-Toe computer opponent.
    pub tictactoe: TicTacToeConfig,
}

impl PortalConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.snake.validate()?;
        self.tictactoe.validate()?;
        Ok(())
    }

    /// Set the session seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the Snake section.
    #[must_use]
    pub fn with_snake(mut self, snake: SnakeConfig) -> Self {
        self.snake = snake;
        self
    }

    /// Replace the Tic-Tac-Toe section.
    #[must_use]
    pub fn with_tictactoe(mut self, tictactoe: TicTacToeConfig) -> Self {
        self.tictactoe = tictactoe;
        self
    }
}

pub(crate) fn invalid(message: impl Into<String>) -> PortalError {
    let message = message.into();
    log::warn!("rejected configuration: {message}");
    PortalError::InvalidConfig(message)
}
