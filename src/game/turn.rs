//! Per-turn selection state and the outcome of a selection.
//!
//! A turn is at most two reveals. `TurnBuffer` holds the cards revealed so
//! far; resolution matches on it exhaustively.

use serde::{Deserialize, Serialize};

use super::timer::HideTicket;
use crate::cards::Symbol;
use crate::core::entity::CardId;

/// A card turned up this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pick {
    pub card: CardId,
    pub symbol: Symbol,
}

impl Pick {
    #[must_use]
    pub const fn new(card: CardId, symbol: Symbol) -> Self {
        Self { card, symbol }
    }
}

/// Cards revealed in the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnBuffer {
    /// No card revealed yet.
    #[default]
    Empty,
    /// First card revealed, awaiting the second.
    One(Pick),
    /// Both revealed. Only observable while a mismatch hide is pending.
    Two(Pick, Pick),
}

impl TurnBuffer {
    /// Check if no card has been revealed this turn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, TurnBuffer::Empty)
    }

    /// Check if both slots are filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        matches!(self, TurnBuffer::Two(..))
    }

    /// The first revealed symbol, if any.
    #[must_use]
    pub fn first(&self) -> Option<Symbol> {
        match *self {
            TurnBuffer::Empty => None,
            TurnBuffer::One(first) | TurnBuffer::Two(first, _) => Some(first.symbol),
        }
    }
}

/// Why a selection changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Every pair has been found.
    GameOver,
    /// A mismatched pair is still showing.
    ResolutionPending,
    /// No card with that id in this session.
    UnknownCard,
    /// The card's symbol has already been matched.
    AlreadyMatched,
    /// The card is already face-up.
    AlreadyFaceUp,
}

/// Result of `GameSession::select_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a turn turned up.
    Revealed(CardId),
    /// Second card completed a pair. `game_over` is set when it was the last pair.
    Matched { symbol: Symbol, game_over: bool },
    /// Second card did not pair. The ticket identifies the scheduled hide.
    Mismatched(HideTicket),
}

impl Selection {
    /// Check if the selection changed the session.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Selection::Ignored(_))
    }

    /// The scheduled hide, for callers driving an external timer.
    #[must_use]
    pub fn hide_ticket(&self) -> Option<HideTicket> {
        match *self {
            Selection::Mismatched(ticket) => Some(ticket),
            _ => None,
        }
    }
}
