//! Game configuration.
//!
//! The symbol universe and the mismatch delay are fixed per session and
//! supplied up front, never read from player input.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::cards::Symbol;
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::new(Symbol::alphabet(4))
//!     .with_mismatch_delay(Duration::from_millis(250));
//!
//! assert_eq!(config.pair_count(), 4);
//! assert_eq!(config.card_count(), 8);
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Symbol;
use crate::deck::CARDS_PER_SYMBOL;

/// Number of distinct symbols in the default universe (`A`..=`H`).
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// How long a mismatched pair stays visible before it is turned back down.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(500);

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distinct card faces, one pair dealt per symbol.
    pub symbols: Vec<Symbol>,

    /// Delay before a mismatched pair is hidden again.
    pub mismatch_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Symbol::alphabet(DEFAULT_PAIR_COUNT))
    }
}

impl GameConfig {
    /// Create a configuration over the given symbol universe.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
        }
    }

    /// Replace the symbol universe.
    #[must_use]
    pub fn with_symbols(mut self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        self.symbols = symbols.into_iter().collect();
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Number of pairs (S).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Number of cards dealt (2S).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.symbols.len() * CARDS_PER_SYMBOL
    }

    /// Check the universe is non-empty and free of duplicates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::EmptyUniverse);
        }

        let mut seen = FxHashSet::default();
        for &symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
        }

        Ok(())
    }
}
