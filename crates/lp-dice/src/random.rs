//! Non-dice random decisions.

use rand::Rng;
use rand::rngs::StdRng;

/// Flip a fair coin.
pub fn coin_flip(rng: &mut StdRng) -> bool {
    rng.random_range(0..2u32) == 1
}

/// Pick one item uniformly, or `None` from an empty slice.
pub fn pick<'a, T>(items: &'a [T], rng: &mut StdRng) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.random_range(0..items.len())])
}
