pub mod config;
pub mod error;
pub mod mapgen;
pub mod seed;
pub mod session;
pub mod types;

pub use config::GenerationConfig;
pub use error::{ConfigError, GenerationError, SessionError};
pub use mapgen::{CaveGenerator, Grid, Level, RunRng};
pub use seed::{Seed, SeedChoice, generate_fallback_seed, resolve_seed};
pub use session::LevelSession;
pub use types::*;
