//! Start and goal selection on a smoothed grid.

use crate::types::Pos;

use super::grid::Grid;
use super::rng::RunRng;

/// Fewest floor tiles a grid needs before placement is attempted.
pub const MIN_FLOOR_CELLS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub start: Pos,
    pub goal: Pos,
}

/// Why a grid cannot host a level. The caller regenerates rather than failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsufficientFloor {
    pub floor_cells: usize,
}

/// Draws `start`, then `goal`, independently and uniformly from the row-major
/// floor tiles. The two may coincide; nothing checks that one reaches the other.
pub fn place_entities(grid: &Grid, rng: &mut RunRng) -> Result<Placement, InsufficientFloor> {
    let floors = grid.floor_positions();
    if floors.len() < MIN_FLOOR_CELLS {
        return Err(InsufficientFloor { floor_cells: floors.len() });
    }
    let insufficient = InsufficientFloor { floor_cells: floors.len() };
    let start = *rng.choose_uniform(&floors).ok_or(insufficient)?;
    let goal = *rng.choose_uniform(&floors).ok_or(insufficient)?;
    Ok(Placement { start, goal })
}
