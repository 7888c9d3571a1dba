//! The memory game state machine.
//!
//! ## Key Types
//!
//! - `GameSession`: Owns the deck, matched set, turn buffer and counters
//! - `TurnBuffer` / `Pick`: Cards revealed in the current turn
//! - `Selection` / `IgnoreReason`: What a card selection did
//! - `HideTicket` / `Generation`: Identity of a deferred mismatch hide
//! - `GameSnapshot` / `CardView` / `Phase`: Renderable view
//! - `TurnRecord`: History of completed comparisons

pub mod history;
pub mod session;
pub mod snapshot;
pub mod timer;
pub mod turn;

pub use history::TurnRecord;
pub use session::GameSession;
pub use snapshot::{CardView, GameSnapshot, Phase};
pub use timer::{Generation, HideTicket, PendingHide};
pub use turn::{IgnoreReason, Pick, Selection, TurnBuffer};
