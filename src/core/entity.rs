//! Card identification.
//!
//! Every card laid out in a session has a unique `CardId`.
//!
//! ## ID Layout
//!
//! IDs are allocated sequentially from 0 as the deck is built, before it is
//! shuffled, so a card's id says nothing about its grid position. IDs are
//! used for lookup only; two cards match on their symbols, never on ids.
//!
//! ```
//! use memory_match::core::CardId;
//!
//! let first = CardId::new(0);
//! assert_eq!(first.next(), CardId::new(1));
//! assert_eq!(format!("{}", first), "Card(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The ID allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let id = CardId::new(0);
        assert_eq!(id.next().raw(), 1);
        assert_eq!(id.next().next(), CardId::new(2));
    }

    #[test]
    fn test_from_u32() {
        assert_eq!(CardId::from(7), CardId::new(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
