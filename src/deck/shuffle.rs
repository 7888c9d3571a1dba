//! Unbiased shuffling and deck multiset construction.
//!
//! `shuffle` is a Fisher–Yates (Knuth) shuffle over any `rand::Rng`, so tests
//! can inject a seeded source and callers can pass `GameRng` or `thread_rng()`.
//!
//! ```
//! use memory_match::core::GameRng;
//! use memory_match::deck::{duplicate_items, shuffle};
//!
//! let mut cards = duplicate_items(&['A', 'B'], 2);
//! assert_eq!(cards, vec!['A', 'A', 'B', 'B']);
//!
//! shuffle(&mut cards, &mut GameRng::new(42));
//! cards.sort();
//! assert_eq!(cards, vec!['A', 'A', 'B', 'B']);
//! ```

use rand::Rng;

/// Shuffle a slice in place.
///
/// Walks `i` from the last index down to 1, swapping element `i` with a
/// uniformly drawn `j` in `[0, i]`. Every permutation is equally likely given
/// a uniform source.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}

/// Repeat each element `times` times, keeping input order and grouping.
///
/// `[A, B]` with `times = 2` yields `[A, A, B, B]`.
#[must_use]
pub fn duplicate_items<T: Clone>(items: &[T], times: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * times);
    for item in items {
        out.extend(std::iter::repeat(item).take(times).cloned());
    }
    out
}
