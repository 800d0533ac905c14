//! Error types surfaced by configuration, generation and the level session.

use thiserror::Error;

/// A generation setting that cannot produce a grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid dimensions {width}x{height} exceed the addressable coordinate range")]
    GridTooLarge { width: usize, height: usize },

    #[error("fill probability must be within [0, 1], got {0}")]
    FillProbabilityOutOfRange(f64),

    #[error("max_attempts must be at least 1")]
    NoAttempts,
}

/// Generation ran out of retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Every attempt left fewer than two floor tiles for start and goal placement.
    #[error(
        "insufficient floor space after {attempts} attempts (last attempt had {floor_cells} floor tiles); \
         check fill_probability"
    )]
    InsufficientFloorSpace { attempts: u32, floor_cells: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("no run is active; call start_new_run first")]
    NotStarted,

    #[error("depth counter cannot go past {0}")]
    DepthOverflow(u32),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
