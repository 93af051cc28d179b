//! Panem Core - district tree and duel engine
//!
//! This crate provides the core simulation:
//! - Competitor and district records
//! - Unbalanced binary search tree of districts in play
//! - Dueler selection (tessera priority, random fallback)
//! - Duel resolution and district elimination
//! - Input parsing and seeded randomness

pub mod person;
pub mod district;
pub mod tree;
pub mod rng;
pub mod duel;
pub mod selection;
pub mod game;
pub mod setup;
pub mod config;

// Re-exports for convenient access
pub use person::{DistrictId, Parity, Person};
pub use district::District;
pub use tree::{DistrictTree, TreeNode};
pub use rng::{RandomSource, SeededRandom, DEFAULT_SEED};
pub use duel::{DuelRule, EffectivenessDuel, Victor};
pub use selection::DuelPair;
pub use game::{GameSummary, HungerGames, Resolution, RoundReport};
pub use setup::{load_panem, parse_panem, SetupError};
pub use config::GameConfig;
