//! Pseudo-random draws for item prices and catalog offers.

use std::ops::RangeInclusive;
use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shared source of prices and catalog picks.
///
/// Prices are drawn uniformly from an inclusive range. The generator sits
/// behind a mutex so one instance can be shared by the cart service and the
/// product catalog.
#[derive(Debug)]
pub struct Randomizer {
    prices: RangeInclusive<u32>,
    rng: Mutex<StdRng>,
}

impl Randomizer {
    /// Entropy-seeded generator. `prices` must be non-empty (`start <= end`).
    pub fn new(prices: RangeInclusive<u32>) -> Self {
        Self {
            prices,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator for reproducible runs.
    pub fn seeded(prices: RangeInclusive<u32>, seed: u64) -> Self {
        Self {
            prices,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn price(&self) -> u32 {
        let range = self.prices.clone();
        self.rng().gen_range(range)
    }

    /// Pick one of `options`. Returns an empty string for an empty slice.
    pub fn choose<'a>(&self, options: &[&'a str]) -> &'a str {
        options.choose(&mut *self.rng()).copied().unwrap_or_default()
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // A panic while holding the lock cannot leave the generator in a bad state.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(80..=150)
    }
}
