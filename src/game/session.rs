//! The turn-resolution state machine.
//!
//! ## Turn Cycle
//!
//! ```text
//! Ready --select--> OneSelected --select--> (compare)
//!   ^                                          |
//!   |<------------- match ---------------------+
//!   |                                          |
//!   +---- hide (tick / resolve_hide) <-- Revealing (mismatch)
//! ```
//!
//! `GameOver` absorbs all input once every pair is matched.
//!
//! ## Deferred Hide
//!
//! A mismatch leaves both cards up and schedules a hide. The caller either
//! advances time with `tick` or hands the returned `HideTicket` to its own
//! timer and calls `resolve_hide`. Tickets carry the session generation, and
//! `reset` advances it, so stale tickets are rejected.
//!
//! ## Example
//!
//! ```
//! use memory_match::cards::{Card, Symbol};
//! use memory_match::core::{CardId, GameConfig};
//! use memory_match::game::{GameSession, Selection};
//!
//! let config = GameConfig::new([Symbol('A'), Symbol('B')]);
//! let layout = [('A', 0), ('A', 1), ('B', 2), ('B', 3)]
//!     .map(|(face, id)| Card::new(CardId::new(id), Symbol(face)));
//! let mut session = GameSession::from_layout(config, layout, 42).unwrap();
//!
//! session.select_card(CardId::new(0));
//! session.select_card(CardId::new(1));
//! session.select_card(CardId::new(2));
//! let last = session.select_card(CardId::new(3));
//!
//! assert_eq!(last, Selection::Matched { symbol: Symbol('B'), game_over: true });
//! assert_eq!(session.snapshot().turn_count, 2);
//! ```

use std::time::Duration;

use im::Vector;
use log::{debug, info, trace};
use rustc_hash::FxHashSet;

use super::history::TurnRecord;
use super::snapshot::{CardView, GameSnapshot, Phase};
use super::timer::{Generation, HideTicket, PendingHide};
use super::turn::{IgnoreReason, Pick, Selection, TurnBuffer};
use crate::cards::{Card, Symbol};
use crate::core::config::GameConfig;
use crate::core::entity::CardId;
use crate::core::error::ConfigError;
use crate::core::rng::{GameRng, GameRngState};
use crate::deck::{Deck, HiddenCards, CARDS_PER_SYMBOL};

/// One game of memory, from deal to last pair.
///
/// Owned by the caller and driven through `select_card`, `tick`,
/// `resolve_hide` and `reset`.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    deck: Deck,
    matched: FxHashSet<Symbol>,
    buffer: TurnBuffer,
    turn_count: u32,
    pending: Option<PendingHide>,
    generation: Generation,
    history: Vector<TurnRecord>,
    rng: GameRng,
}

impl GameSession {
    /// Deal a freshly shuffled game.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Deal a game seeded from entropy.
    pub fn from_entropy(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Deal a game drawing from the given RNG.
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let deck = Deck::build(&config.symbols, &mut rng);
        Ok(Self::assemble(config, deck, rng))
    }

    /// Start from a fixed card order.
    ///
    /// The layout must deal exactly one pair of every configured symbol,
    /// each card under its own id.
    /// `seed` drives the shuffles of later resets.
    pub fn from_layout(
        config: GameConfig,
        cards: impl IntoIterator<Item = Card>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let cards: Vec<Card> = cards.into_iter().collect();

        let mut ids = FxHashSet::default();
        for card in &cards {
            if !ids.insert(card.id) {
                return Err(ConfigError::DuplicateCardId(card.id));
            }
        }

        let deck = Deck::from_cards(cards);

        if deck.len() != config.card_count() {
            return Err(ConfigError::LayoutSize {
                expected: config.card_count(),
                found: deck.len(),
            });
        }
        for &symbol in &config.symbols {
            let found = deck.count_symbol(symbol);
            if found != CARDS_PER_SYMBOL {
                return Err(ConfigError::UnpairedSymbol {
                    symbol,
                    expected: CARDS_PER_SYMBOL,
                    found,
                });
            }
        }

        Ok(Self::assemble(config, deck, GameRng::new(seed)))
    }

    fn assemble(config: GameConfig, deck: Deck, rng: GameRng) -> Self {
        debug!(
            "dealt {} cards ({} pairs) from seed {}",
            deck.len(),
            config.pair_count(),
            rng.seed()
        );
        Self {
            config,
            deck,
            matched: FxHashSet::default(),
            buffer: TurnBuffer::Empty,
            turn_count: 0,
            pending: None,
            generation: Generation::default(),
            history: Vector::new(),
            rng,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn buffer(&self) -> TurnBuffer {
        self.buffer
    }

    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matched.len()
    }

    /// Check if a symbol has been matched.
    #[must_use]
    pub fn is_matched(&self, symbol: Symbol) -> bool {
        self.matched.contains(&symbol)
    }

    /// All pairs found.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.matched.len() == self.config.pair_count()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The hide waiting to fire, if a mismatch is showing.
    #[must_use]
    pub fn pending_hide(&self) -> Option<HideTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// Time left before the pending hide fires.
    #[must_use]
    pub fn hide_remaining(&self) -> Option<Duration> {
        self.pending.map(|p| p.remaining)
    }

    /// Completed comparisons, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// RNG state, for reproducing the next reset's shuffle.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_over() {
            return Phase::GameOver;
        }
        if self.pending.is_some() {
            return Phase::Revealing;
        }
        match self.buffer {
            TurnBuffer::Empty => Phase::Ready,
            TurnBuffer::One(_) => Phase::OneSelected,
            TurnBuffer::Two(..) => Phase::Revealing,
        }
    }

    // === Transitions ===

    /// Reveal a card.
    ///
    /// Never fails: a selection that is not allowed right now is ignored and
    /// reported as `Selection::Ignored`.
    pub fn select_card(&mut self, id: CardId) -> Selection {
        match self.check_selectable(id) {
            Ok(card) => self.reveal(card),
            Err(reason) => {
                trace!("ignored selection of {}: {:?}", id, reason);
                Selection::Ignored(reason)
            }
        }
    }

    fn check_selectable(&self, id: CardId) -> Result<Card, IgnoreReason> {
        if self.is_over() {
            return Err(IgnoreReason::GameOver);
        }
        if self.pending.is_some() || self.buffer.is_full() {
            return Err(IgnoreReason::ResolutionPending);
        }
        let card = *self.deck.get(id).ok_or(IgnoreReason::UnknownCard)?;
        if self.matched.contains(&card.symbol) {
            return Err(IgnoreReason::AlreadyMatched);
        }
        if card.face_up {
            return Err(IgnoreReason::AlreadyFaceUp);
        }
        Ok(card)
    }

    fn reveal(&mut self, card: Card) -> Selection {
        let pick = Pick::new(card.id, card.symbol);

        match self.buffer {
            TurnBuffer::Empty => {
                self.deck.set_face_up(card.id, true);
                self.buffer = TurnBuffer::One(pick);

                debug!("revealed {} ({})", card.id, card.symbol);
                Selection::Revealed(card.id)
            }
            TurnBuffer::One(first) => {
                self.deck.set_face_up(card.id, true);
                self.buffer = TurnBuffer::Two(first, pick);
                self.compare(first, pick)
            }
            TurnBuffer::Two(..) => Selection::Ignored(IgnoreReason::ResolutionPending),
        }
    }

    fn compare(&mut self, first: Pick, second: Pick) -> Selection {
        self.turn_count += 1;
        let matched = first.symbol == second.symbol;

        self.history.push_back(TurnRecord {
            turn: self.turn_count,
            first: first.card,
            second: second.card,
            symbols: (first.symbol, second.symbol),
            matched,
        });

        if matched {
            self.matched.insert(first.symbol);
            self.clear_turn();
            let game_over = self.is_over();

            debug!("turn {}: matched {}", self.turn_count, first.symbol);
            if game_over {
                info!("all {} pairs found in {} turns", self.matched.len(), self.turn_count);
            }
            Selection::Matched { symbol: first.symbol, game_over }
        } else {
            let ticket = HideTicket::new(self.generation, self.turn_count);
            self.pending = Some(PendingHide::new(ticket, self.config.mismatch_delay));

            debug!(
                "turn {}: {} != {}, hiding in {:?}",
                self.turn_count, first.symbol, second.symbol, self.config.mismatch_delay
            );
            Selection::Mismatched(ticket)
        }
    }

    /// Advance the pending hide's countdown.
    ///
    /// Returns the cards turned down if the hide fired.
    pub fn tick(&mut self, elapsed: Duration) -> Option<HiddenCards> {
        let due = self.pending.as_mut()?.advance(elapsed);
        due.then(|| self.apply_hide())
    }

    /// Fire the pending hide now, if `ticket` identifies it.
    ///
    /// Tickets from an earlier generation or an already-resolved turn are
    /// ignored and return `None`.
    pub fn resolve_hide(&mut self, ticket: HideTicket) -> Option<HiddenCards> {
        match self.pending_hide() {
            Some(pending) if pending == ticket => Some(self.apply_hide()),
            _ => {
                trace!(
                    "dropped stale hide for turn {} ({}, current {})",
                    ticket.turn,
                    ticket.generation,
                    self.generation
                );
                None
            }
        }
    }

    fn apply_hide(&mut self) -> HiddenCards {
        let matched = &self.matched;
        let hidden = self.deck.hide_face_up_except(|card| matched.contains(&card.symbol));
        self.clear_turn();

        debug!("hid {:?}", hidden);
        hidden
    }

    fn clear_turn(&mut self) {
        self.buffer = TurnBuffer::Empty;
        self.pending = None;
    }

    /// Discard this game and deal a new one.
    ///
    /// Safe at any time. A hide still pending from the old game is dropped
    /// and its ticket will no longer resolve.
    pub fn reset(&mut self) -> GameSnapshot {
        let mut rng = self.rng.fork();
        self.deck = Deck::build(&self.config.symbols, &mut rng);
        self.rng = rng;

        self.matched.clear();
        self.clear_turn();
        self.turn_count = 0;
        self.history = Vector::new();
        self.generation = self.generation.next();

        info!("new game {} dealt from seed {}", self.generation, self.rng.seed());
        self.snapshot()
    }

    // === View ===

    /// Build the renderable view.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let locked = self.is_over() || self.pending.is_some() || self.buffer.is_full();
        let cards = self
            .deck
            .iter()
            .map(|card| {
                let matched = self.matched.contains(&card.symbol);
                CardView {
                    id: card.id,
                    symbol: (card.face_up || matched).then_some(card.symbol),
                    face_up: card.face_up,
                    matched,
                    disabled: matched || card.face_up || locked,
                }
            })
            .collect();

        GameSnapshot {
            cards,
            turn_count: self.turn_count,
            match_count: self.matched.len(),
            is_game_over: self.is_over(),
            phase: self.phase(),
            generation: self.generation,
        }
    }
}
