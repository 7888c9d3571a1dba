//! Card system: faces and card state.
//!
//! ## Key Types
//!
//! - `Symbol`: Opaque card face, compared for equality when resolving a turn
//! - `Card`: A card in the deck (id, symbol, face-up flag)

pub mod card;
pub mod symbol;

pub use card::Card;
pub use symbol::Symbol;
