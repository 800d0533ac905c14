//! The single pseudo-random stream a run draws from.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::seed::Seed;

/// 2^-53: scales the top 53 bits of a draw into `[0, 1)`.
const UNIT_F64: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Owned by the level session and lent to noise fill and placement. Draw
/// order matters: every draw advances the same stream.
#[derive(Clone, Debug)]
pub struct RunRng {
    stream: ChaCha8Rng,
}

impl RunRng {
    pub fn initialize(seed: &Seed) -> Self {
        Self { stream: ChaCha8Rng::from_seed(seed.stream_key()) }
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        (self.stream.next_u64() >> 11) as f64 * UNIT_F64
    }

    /// Uniformly picks one element, `None` for an empty slice.
    pub fn choose_uniform<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.below(items.len() as u64) as usize;
        items.get(index)
    }

    fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        // Largest multiple of `bound` that fits; draws above it would bias low indices.
        let limit = u64::MAX - u64::MAX % bound;
        loop {
            let value = self.stream.next_u64();
            if value < limit {
                return value % bound;
            }
        }
    }
}
