//! Seed values and the fallback used when the player leaves the seed box empty.

use std::fmt;
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Longest seed the menu input box accepts.
pub const MAX_SEED_CHARS: usize = 15;

pub const FALLBACK_SEED_MIN: u64 = 1000;
pub const FALLBACK_SEED_MAX: u64 = 9999;

/// Opaque run seed. Integer seeds are kept as their decimal text so a seed is
/// always reproducible from the string shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(String);

impl Seed {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 32-byte key for the run's ChaCha stream.
    pub fn stream_key(&self) -> [u8; 32] {
        let digest = Sha256::digest(self.0.as_bytes());
        let mut key = [0_u8; 32];
        key.copy_from_slice(&digest);
        key
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Entered(Seed),
    Generated(Seed),
}

impl SeedChoice {
    pub fn seed(&self) -> &Seed {
        match self {
            Self::Entered(seed) | Self::Generated(seed) => seed,
        }
    }

    /// True when the seed came from the fallback rather than the player.
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    pub fn into_seed(self) -> Seed {
        match self {
            Self::Entered(seed) | Self::Generated(seed) => seed,
        }
    }
}

/// Uses `input` verbatim when non-empty, otherwise the seed produced by `fallback`.
pub fn resolve_seed(input: &str, fallback: impl FnOnce() -> Seed) -> SeedChoice {
    if input.is_empty() {
        SeedChoice::Generated(fallback())
    } else {
        SeedChoice::Entered(input.into())
    }
}

static FALLBACK_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Four-digit seed drawn from runtime entropy, independent of any run stream.
pub fn generate_fallback_seed() -> Seed {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = FALLBACK_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    Seed::from(fallback_seed_from_entropy(entropy))
}

fn fallback_seed_from_entropy(entropy: u64) -> u64 {
    let span = FALLBACK_SEED_MAX - FALLBACK_SEED_MIN + 1;
    FALLBACK_SEED_MIN + mix_seed(entropy) % span
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
