//! Deck construction: shuffling and the per-session card layout.
//!
//! ## Key Types
//!
//! - `shuffle` / `shuffled`: Fisher–Yates over an injected `rand::Rng`
//! - `duplicate_items`: Build the paired symbol multiset
//! - `Deck`: Cards in display order with id lookup

pub mod layout;
pub mod shuffle;

pub use layout::{Deck, HiddenCards, CARDS_PER_SYMBOL};
pub use shuffle::{duplicate_items, shuffle, shuffled};
