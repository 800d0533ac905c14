//! Seeded cave generation: noise, cellular-automaton smoothing, start/goal placement.

pub mod automaton;
pub mod noise;
pub mod placement;

mod generator;
mod grid;
mod model;
mod rng;

pub use automaton::{WALL_NEIGHBOUR_THRESHOLD, smooth, smooth_passes};
pub use generator::CaveGenerator;
pub use grid::Grid;
pub use model::Level;
pub use noise::generate_noise;
pub use placement::{InsufficientFloor, MIN_FLOOR_CELLS, Placement, place_entities};
pub use rng::RunRng;
