//! Cards laid out on the table.
//!
//! A `Card` pairs an immutable identity and face with the one piece of
//! mutable state the game tracks per card: whether it is currently turned up.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;
use crate::core::entity::CardId;

/// A single card in a session's deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique ID for lookup.
    pub id: CardId,

    /// The face that is compared when two cards are revealed.
    pub symbol: Symbol,

    /// Is this card currently turned face-up?
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
        }
    }

    /// Check if this card shares a face with another.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.symbol == other.symbol
    }
}
