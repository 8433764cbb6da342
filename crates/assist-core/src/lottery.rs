//! Unique random number sampling for lottery tickets.
//!
//! Draws without replacement from a closed integer range and returns the picks
//! sorted ascending. Invalid parameter combinations yield an empty result — a
//! deliberate "no valid ticket" signal, never an error.

use rand::Rng;

/// Smallest number any ticket may carry.
const RANGE_FLOOR: u32 = 1;
/// Largest number any ticket may carry.
const RANGE_CEILING: u32 = 1000;

/// Sample `quantity` unique numbers from `[min, max]`, sorted ascending.
///
/// Parameters must satisfy `min >= 1`, `max <= 1000`, `min < max`, and
/// `1 <= quantity <= max - min + 1`; any violation returns an empty Vec.
pub fn generate_ticket_numbers(min: u32, max: u32, quantity: u32) -> Vec<u32> {
    generate_ticket_numbers_with(&mut rand::rng(), min, max, quantity)
}

/// Same as [`generate_ticket_numbers`], but drawing from a caller-supplied RNG.
///
/// This is the deterministic seam: pass a seeded RNG to get reproducible picks.
pub fn generate_ticket_numbers_with<R: Rng + ?Sized>(
    rng: &mut R,
    min: u32,
    max: u32,
    quantity: u32,
) -> Vec<u32> {
    if min < RANGE_FLOOR || max > RANGE_CEILING || min >= max {
        return Vec::new();
    }
    // Checked after the bounds above, so `max - min + 1` cannot underflow.
    let span = max - min + 1;
    if quantity < 1 || quantity > span {
        return Vec::new();
    }

    // Uniform sampling without replacement over range indices, then offset
    // back into [min, max].
    let mut numbers: Vec<u32> = rand::seq::index::sample(rng, span as usize, quantity as usize)
        .into_iter()
        .map(|i| min + i as u32)
        .collect();
    numbers.sort_unstable();
    numbers
}
