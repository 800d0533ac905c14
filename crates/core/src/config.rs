//! Generation settings shared by the generator and the level session.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_WIDTH: usize = 25;
pub const DEFAULT_HEIGHT: usize = 15;
pub const DEFAULT_FILL_PROBABILITY: f64 = 0.45;
pub const DEFAULT_SMOOTHING_PASSES: u32 = 5;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    /// Chance that a noise cell starts out as wall.
    pub fill_probability: f64,
    pub smoothing_passes: u32,
    /// Upper bound on noise+smooth attempts before placement gives up.
    pub max_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill_probability: DEFAULT_FILL_PROBABILITY,
            smoothing_passes: DEFAULT_SMOOTHING_PASSES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(ConfigError::FillProbabilityOutOfRange(self.fill_probability));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        Ok(())
    }
}
