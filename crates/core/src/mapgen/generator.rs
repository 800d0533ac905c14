//! Noise → smoothing → placement, retried until a grid can host a level.

use tracing::{debug, error, warn};

use crate::config::GenerationConfig;
use crate::error::{ConfigError, GenerationError};

use super::automaton::smooth_passes;
use super::model::Level;
use super::noise::generate_noise;
use super::placement::place_entities;
use super::rng::RunRng;

#[derive(Clone, Debug)]
pub struct CaveGenerator {
    config: GenerationConfig,
}

impl CaveGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generator for the reference 25x15 configuration.
    pub fn reference() -> Self {
        Self { config: GenerationConfig::default() }
    }

    /// Builds the level at `depth` from the continuing run stream. Each failed
    /// attempt discards its grid and draws fresh noise from the same stream.
    pub fn generate(&self, rng: &mut RunRng, depth: u32) -> Result<Level, GenerationError> {
        let config = &self.config;
        let mut floor_cells = 0;
        for attempt in 1..=config.max_attempts {
            let noise = generate_noise(rng, config.width, config.height, config.fill_probability);
            let grid = smooth_passes(noise, config.smoothing_passes);
            match place_entities(&grid, rng) {
                Ok(placement) => {
                    let floor_cells = grid.floor_positions().len();
                    debug!(depth, attempt, floor_cells, "level generated");
                    return Ok(Level::new(grid, placement.start, placement.goal, depth));
                }
                Err(insufficient) => {
                    floor_cells = insufficient.floor_cells;
                    warn!(depth, attempt, floor_cells, "discarding grid with too little floor");
                }
            }
        }
        error!(depth, attempts = config.max_attempts, "level generation exhausted its attempts");
        Err(GenerationError::InsufficientFloorSpace { attempts: config.max_attempts, floor_cells })
    }
}
