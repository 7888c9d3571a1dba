//! The shuffled layout of cards for one session.
//!
//! ## Layout
//!
//! A `Deck` holds every card in display order. Building one:
//! 1. duplicates each symbol of the universe into a pair,
//! 2. allocates sequential `CardId`s in that grouped order,
//! 3. shuffles the cards with the supplied RNG.
//!
//! Cards are stored in an `im::Vector` so snapshots and history can share
//! structure with the live deck. An `FxHashMap` indexes positions by id.

use im::Vector;
use rand::Rng;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::shuffle::{duplicate_items, shuffle};
use crate::cards::{Card, Symbol};
use crate::core::entity::CardId;

/// Number of cards dealt per symbol.
pub const CARDS_PER_SYMBOL: usize = 2;

/// Cards turned face-down by one hide. Almost always the mismatched pair.
pub type HiddenCards = SmallVec<[CardId; 2]>;

/// Ordered cards plus an id → position index.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vector<Card>,
    positions: FxHashMap<CardId, usize>,
}

impl Deck {
    /// Build a freshly shuffled deck with one pair per symbol.
    pub fn build<R: Rng + ?Sized>(symbols: &[Symbol], rng: &mut R) -> Self {
        let mut next_id = CardId::new(0);
        let mut cards: Vec<Card> = duplicate_items(symbols, CARDS_PER_SYMBOL)
            .into_iter()
            .map(|symbol| {
                let card = Card::new(next_id, symbol);
                next_id = next_id.next();
                card
            })
            .collect();

        shuffle(&mut cards, rng);
        Self::from_cards(cards)
    }

    /// Lay out cards in exactly the given order.
    ///
    /// Used for fixed layouts in tests and replays. Every card is turned face-down.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: Vector<Card> = cards
            .into_iter()
            .map(|card| Card { face_up: false, ..card })
            .collect();
        let positions = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id, pos))
            .collect();

        Self { cards, positions }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Display position of a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.position(id).and_then(|pos| self.cards.get(pos))
    }

    /// Get the card at a display position.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Turn a card face-up or face-down.
    ///
    /// Returns false if the card does not exist.
    pub fn set_face_up(&mut self, id: CardId, face_up: bool) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        match self.cards.get_mut(pos) {
            Some(card) => {
                card.face_up = face_up;
                true
            }
            None => false,
        }
    }

    /// Turn face-down every face-up card that `keep` does not claim.
    ///
    /// Returns the ids of the cards hidden, in display order.
    pub fn hide_face_up_except<F>(&mut self, mut keep: F) -> HiddenCards
    where
        F: FnMut(&Card) -> bool,
    {
        let mut hidden = HiddenCards::new();
        for card in self.cards.iter_mut() {
            if card.face_up && !keep(card) {
                card.face_up = false;
                hidden.push(card.id);
            }
        }
        hidden
    }

    /// Number of cards carrying a symbol.
    #[must_use]
    pub fn count_symbol(&self, symbol: Symbol) -> usize {
        self.cards.iter().filter(|c| c.symbol == symbol).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn letters(s: &str) -> Vec<Symbol> {
        s.chars().map(Symbol).collect()
    }

    #[test]
    fn test_build_pairs_every_symbol() {
        let symbols = letters("ABCDEFGH");
        let deck = Deck::build(&symbols, &mut GameRng::new(42));

        assert_eq!(deck.len(), 16);
        for &symbol in &symbols {
            assert_eq!(deck.count_symbol(symbol), 2);
        }
        assert!(deck.iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_build_assigns_unique_ids() {
        let deck = Deck::build(&letters("ABCD"), &mut GameRng::new(1));

        let mut ids: Vec<_> = deck.iter().map(|c| c.id.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_build_is_deterministic() {
        let symbols = letters("ABCDEF");
        let a = Deck::build(&symbols, &mut GameRng::new(5));
        let b = Deck::build(&symbols, &mut GameRng::new(5));

        let order_a: Vec<_> = a.iter().copied().collect();
        let order_b: Vec<_> = b.iter().copied().collect();
        assert_eq!(order_a, order_b);
    }

    #[test]
    fn test_lookup_by_id() {
        let deck = Deck::build(&letters("AB"), &mut GameRng::new(3));

        for (pos, card) in deck.iter().enumerate() {
            assert_eq!(deck.position(card.id), Some(pos));
            assert_eq!(deck.get(card.id), Some(card));
            assert_eq!(deck.at(pos), Some(card));
        }
        assert!(deck.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_set_face_up() {
        let mut deck = Deck::from_cards(vec![
            Card::new(CardId::new(0), Symbol('A')),
            Card::new(CardId::new(1), Symbol('A')),
        ]);

        assert!(deck.set_face_up(CardId::new(1), true));
        assert!(deck.get(CardId::new(1)).unwrap().face_up);
        assert!(!deck.set_face_up(CardId::new(7), true));
    }

    #[test]
    fn test_hide_face_up_except() {
        let mut deck = Deck::from_cards(vec![
            Card::new(CardId::new(0), Symbol('A')),
            Card::new(CardId::new(1), Symbol('A')),
            Card::new(CardId::new(2), Symbol('B')),
            Card::new(CardId::new(3), Symbol('C')),
        ]);
        for id in 0..4 {
            deck.set_face_up(CardId::new(id), true);
        }

        let hidden = deck.hide_face_up_except(|c| c.symbol == Symbol('A'));

        assert_eq!(hidden.as_slice(), &[CardId::new(2), CardId::new(3)]);
        assert!(deck.get(CardId::new(0)).unwrap().face_up);
        assert!(deck.get(CardId::new(1)).unwrap().face_up);
        assert!(!deck.get(CardId::new(2)).unwrap().face_up);
        assert!(!deck.get(CardId::new(3)).unwrap().face_up);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut deck = Deck::build(&letters("AB"), &mut GameRng::new(3));
        let before = deck.clone();
        let id = deck.at(0).unwrap().id;

        deck.set_face_up(id, true);

        assert!(!before.get(id).unwrap().face_up);
    }
}
