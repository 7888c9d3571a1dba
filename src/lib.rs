//! # memory-match
//!
//! Turn-resolution core for a single-player memory (concentration) game.
//!
//! A deck of paired symbols is shuffled and laid out face-down. Each turn the
//! player reveals two cards: pairs stay up, mismatches are turned back down
//! after a short delay, and the game ends when every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: A `GameSession` is a plain value. No globals,
//!    no hidden scheduler.
//!
//! 2. **Never Fails Mid-Game**: Selections that are not allowed right now are
//!    ignored and reported, never raised as errors.
//!
//! 3. **Deterministic**: Deals come from a seedable ChaCha8 RNG, so games
//!    replay exactly from their seed.
//!
//! ## Deferred Hide
//!
//! Mismatches schedule a hide stamped with the session generation. Drive it
//! with `GameSession::tick`, or hand the `HideTicket` to your own timer and
//! call `GameSession::resolve_hide`. `reset` invalidates outstanding tickets.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, errors
//! - `cards`: Symbols and cards
//! - `deck`: Shuffling and the dealt layout
//! - `game`: Session state machine and snapshots

pub mod core;
pub mod cards;
pub mod deck;
pub mod game;

// Re-export commonly used types
pub use crate::core::{CardId, ConfigError, GameConfig, GameRng, GameRngState};

pub use crate::cards::{Card, Symbol};

pub use crate::deck::{duplicate_items, shuffle, shuffled, Deck, HiddenCards};

pub use crate::game::{
    CardView, GameSession, GameSnapshot, Generation, HideTicket,
    IgnoreReason, Phase, Pick, Selection, TurnBuffer, TurnRecord,
};
