//! Deferred mismatch hide.
//!
//! A mismatch schedules a single-shot hide. Every scheduled hide is stamped
//! with the session's `Generation`; `reset` advances the generation and drops
//! the pending hide, so a ticket issued before the reset can never fire
//! against the new layout.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session generation. Advances on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// Identifies one scheduled hide.
///
/// Hand it to an external timer and pass it back to
/// `GameSession::resolve_hide` when the delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HideTicket {
    /// Generation the hide was scheduled in.
    pub generation: Generation,
    /// Turn number whose mismatch scheduled it.
    pub turn: u32,
}

impl HideTicket {
    /// Create a ticket.
    #[must_use]
    pub const fn new(generation: Generation, turn: u32) -> Self {
        Self { generation, turn }
    }
}

/// A scheduled hide and the time left before it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingHide {
    pub ticket: HideTicket,
    pub remaining: Duration,
}

impl PendingHide {
    /// Schedule a hide after `delay`.
    #[must_use]
    pub const fn new(ticket: HideTicket, delay: Duration) -> Self {
        Self {
            ticket,
            remaining: delay,
        }
    }

    /// Count down by `elapsed`. Returns true once the hide is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.remaining.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_next() {
        let generation = Generation::default();
        assert_eq!(generation.next(), Generation(1));
        assert_eq!(Generation(u64::MAX).next(), Generation(0));
        assert_eq!(format!("{}", Generation(3)), "Gen(3)");
    }

    #[test]
    fn test_pending_countdown() {
        let ticket = HideTicket::new(Generation(0), 1);
        let mut pending = PendingHide::new(ticket, Duration::from_millis(500));

        assert!(!pending.advance(Duration::from_millis(200)));
        assert_eq!(pending.remaining, Duration::from_millis(300));
        assert!(!pending.advance(Duration::from_millis(299)));
        assert!(pending.advance(Duration::from_millis(5)));
        assert_eq!(pending.remaining, Duration::ZERO);
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let mut pending = PendingHide::new(HideTicket::new(Generation(0), 1), Duration::ZERO);
        assert!(pending.advance(Duration::ZERO));
    }

    #[test]
    fn test_tickets_differ_by_generation() {
        assert_ne!(
            HideTicket::new(Generation(0), 1),
            HideTicket::new(Generation(1), 1)
        );
    }
}
