//! Run lifecycle: seed once, then hand out successive levels from one stream.
//! The session validates moves but does not own the traveller's position.

use tracing::info;

use crate::config::GenerationConfig;
use crate::error::{ConfigError, SessionError};
use crate::mapgen::{CaveGenerator, Level, RunRng};
use crate::seed::Seed;
use crate::types::Pos;

const FIRST_DEPTH: u32 = 1;

#[derive(Clone, Debug)]
struct ActiveRun {
    seed: Seed,
    rng: RunRng,
    level: Level,
}

/// `Uninitialized` until `start_new_run`, then `Active` until `end_run`.
#[derive(Clone, Debug)]
pub struct LevelSession {
    generator: CaveGenerator,
    run: Option<ActiveRun>,
}

impl Default for LevelSession {
    fn default() -> Self {
        Self { generator: CaveGenerator::reference(), run: None }
    }
}

impl LevelSession {
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        Ok(Self { generator: CaveGenerator::new(config)?, run: None })
    }

    /// Seeds a fresh stream and produces the depth-1 level. Replaces any run in progress.
    pub fn start_new_run(&mut self, seed: impl Into<Seed>) -> Result<&Level, SessionError> {
        let seed = seed.into();
        info!(seed = %seed, "starting run");
        self.run = None;
        let mut rng = RunRng::initialize(&seed);
        let level = self.generator.generate(&mut rng, FIRST_DEPTH)?;
        let run = self.run.insert(ActiveRun { seed, rng, level });
        Ok(&run.level)
    }

    /// Next level from the continuing stream, one depth deeper. On failure the
    /// current level stays in place.
    pub fn advance_level(&mut self) -> Result<&Level, SessionError> {
        let run = self.run.as_mut().ok_or(SessionError::NotStarted)?;
        let current = run.level.depth();
        let depth = current.checked_add(1).ok_or(SessionError::DepthOverflow(current))?;
        run.level = self.generator.generate(&mut run.rng, depth)?;
        info!(seed = %run.seed, depth, "advanced to next level");
        Ok(&run.level)
    }

    /// True iff `position + delta` is an in-bounds floor tile of the current level.
    pub fn is_valid_move(&self, position: Pos, delta: Pos) -> bool {
        self.level().is_some_and(|level| level.is_valid_move(position, delta))
    }

    pub fn end_run(&mut self) {
        self.run = None;
    }

    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    pub fn level(&self) -> Option<&Level> {
        self.run.as_ref().map(|run| &run.level)
    }

    pub fn seed(&self) -> Option<&Seed> {
        self.run.as_ref().map(|run| &run.seed)
    }

    pub fn depth(&self) -> Option<u32> {
        self.level().map(Level::depth)
    }
}
