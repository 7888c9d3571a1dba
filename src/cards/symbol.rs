//! Card faces.

use serde::{Deserialize, Serialize};

/// The face of a card.
///
/// Opaque to the engine beyond equality: two revealed cards match when
/// their symbols are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(face: char) -> Self {
        Self(face)
    }

    /// The character printed on the card.
    #[must_use]
    pub const fn face(self) -> char {
        self.0
    }

    /// The first `count` uppercase letters, `A` onwards.
    ///
    /// Capped at 26.
    ///
    /// ```
    /// use memory_match::cards::Symbol;
    ///
    /// let letters = Symbol::alphabet(3);
    /// assert_eq!(letters, vec![Symbol('A'), Symbol('B'), Symbol('C')]);
    /// ```
    #[must_use]
    pub fn alphabet(count: usize) -> Vec<Self> {
        ('A'..='Z').take(count).map(Self).collect()
    }
}

impl From<char> for Symbol {
    fn from(face: char) -> Self {
        Self(face)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet() {
        assert!(Symbol::alphabet(0).is_empty());
        assert_eq!(Symbol::alphabet(8).last(), Some(&Symbol('H')));
        assert_eq!(Symbol::alphabet(100).len(), 26);
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::new('Q').to_string(), "Q");
    }
}
