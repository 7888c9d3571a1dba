//! Core types: card ids, RNG, configuration, errors.
//!
//! These are the leaves every other module builds on.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_MISMATCH_DELAY, DEFAULT_PAIR_COUNT};
pub use entity::CardId;
pub use error::ConfigError;
pub use rng::{GameRng, GameRngState};
