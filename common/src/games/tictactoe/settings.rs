use std::time::Duration;

use super::types::{Difficulty, ModeSettings};

pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSettings {
    pub vs_computer: bool,
    pub difficulty: Difficulty,
    /// Pause before the computer answers. Cosmetic only.
    pub computer_delay: Duration,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            vs_computer: false,
            difficulty: Difficulty::default(),
            computer_delay: DEFAULT_COMPUTER_DELAY,
        }
    }
}

impl TicTacToeSettings {
    pub fn mode(&self) -> ModeSettings {
        ModeSettings {
            vs_computer: self.vs_computer,
            difficulty: self.difficulty,
        }
    }
}
