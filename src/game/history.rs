//! Record of completed comparisons.

use serde::{Deserialize, Serialize};

use crate::cards::Symbol;
use crate::core::entity::CardId;

/// One completed comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,
    /// First card revealed.
    pub first: CardId,
    /// Second card revealed.
    pub second: CardId,
    /// Symbols of the two cards, in reveal order.
    pub symbols: (Symbol, Symbol),
    /// Whether the two cards paired.
    pub matched: bool,
}
