//! Configuration for a game
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};

use crate::rng::DEFAULT_SEED;

/// Game configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the random source
    pub seed: u64,
    /// Stop `play` after this many rounds (None = until the game ends)
    pub max_rounds: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_rounds: None,
        }
    }
}

impl GameConfig {
    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cap the number of rounds played
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}
