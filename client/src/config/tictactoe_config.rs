use std::time::Duration;

use common::config::Validate;
use common::games::tictactoe::{DEFAULT_COMPUTER_DELAY, Difficulty, TicTacToeSettings};
use serde::{Deserialize, Serialize};

pub const MAX_COMPUTER_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub vs_computer: bool,
    pub difficulty: Difficulty,
    pub computer_delay_ms: u64,
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {} (got {})",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            vs_computer: false,
            difficulty: Difficulty::default(),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY.as_millis() as u64,
        }
    }
}

impl From<&TicTacToeConfig> for TicTacToeSettings {
    fn from(config: &TicTacToeConfig) -> Self {
        Self {
            vs_computer: config.vs_computer,
            difficulty: config.difficulty,
            computer_delay: Duration::from_millis(config.computer_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_engine_defaults() {
        let settings = TicTacToeSettings::from(&TicTacToeConfig::default());
        assert_eq!(settings, TicTacToeSettings::default());
    }

    #[test]
    fn test_delay_limit() {
        let mut config = TicTacToeConfig::default();
        config.computer_delay_ms = MAX_COMPUTER_DELAY_MS;
        assert!(config.validate().is_ok());
        config.computer_delay_ms = MAX_COMPUTER_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }
}
