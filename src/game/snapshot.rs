//! Renderable view of a session.
//!
//! The presentation layer re-renders from a `GameSnapshot` after every
//! transition. Faces of hidden cards are withheld.

use serde::{Deserialize, Serialize};

use super::timer::Generation;
use crate::cards::Symbol;
use crate::core::entity::CardId;

/// Where the session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first card of a turn.
    Ready,
    /// One card up, waiting for the second.
    OneSelected,
    /// A mismatched pair is showing; input is disabled until it hides.
    Revealing,
    /// All pairs found.
    GameOver,
}

/// One card as the presentation layer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// Face, present only when the card is face-up or matched.
    pub symbol: Option<Symbol>,
    pub face_up: bool,
    pub matched: bool,
    /// Selecting this card would be ignored.
    pub disabled: bool,
}

/// Full renderable state after a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cards in display order.
    pub cards: Vec<CardView>,
    pub turn_count: u32,
    pub match_count: usize,
    pub is_game_over: bool,
    pub phase: Phase,
    pub generation: Generation,
}

impl GameSnapshot {
    /// Look up a card's view by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardView> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards that would accept a selection.
    pub fn selectable(&self) -> impl Iterator<Item = &CardView> {
        self.cards.iter().filter(|c| !c.disabled)
    }

    /// End-of-game line, once every pair is found.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.is_game_over
            .then(|| format!("You completed the game in {} turns", self.turn_count))
    }
}
