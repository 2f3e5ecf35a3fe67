//! Tic-Tac-Toe opponent parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::invalid;
use crate::core::Result;

/// Longest pause the computer may take before answering.
pub const MAX_COMPUTER_DELAY_MS: u64 = 60_000;

/// Tic-Tac-Toe configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Pause before the computer answers a move (default: 500 ms).
    pub computer_delay_ms: u64,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self { computer_delay_ms: 500 }
    }
}

impl TicTacToeConfig {
    #[must_use]
    pub fn with_computer_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Zero is allowed; anything above `MAX_COMPUTER_DELAY_MS` is not.
    pub fn validate(&self) -> Result<()> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(invalid(format!(
                "tictactoe computer_delay_ms {} exceeds {MAX_COMPUTER_DELAY_MS}",
                self.computer_delay_ms
            )));
        }
        Ok(())
    }
}
