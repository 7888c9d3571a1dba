//! Configuration errors.
//!
//! Gameplay never fails: invalid selections are ignored. The fallible steps
//! are validating the symbol universe and any fixed layout a session is
//! built from.

use thiserror::Error;

use crate::cards::Symbol;
use crate::core::entity::CardId;

/// Rejected game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("symbol universe is empty")]
    EmptyUniverse,

    #[error("symbol {0} appears more than once in the universe")]
    DuplicateSymbol(Symbol),

    #[error("layout deals {0} more than once")]
    DuplicateCardId(CardId),

    #[error("layout has {found} cards, expected {expected}")]
    LayoutSize { expected: usize, found: usize },

    #[error("layout deals symbol {symbol} {found} times, expected {expected}")]
    UnpairedSymbol {
        symbol: Symbol,
        expected: usize,
        found: usize,
    },
}
