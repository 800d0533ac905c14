//! Cellular-automaton smoothing that turns noise into caves.

use crate::types::TileKind;

use super::grid::Grid;

/// A cell becomes wall when more than this many of its eight neighbours are wall.
pub const WALL_NEIGHBOUR_THRESHOLD: usize = 4;

/// One smoothing pass. Every cell is computed from `grid` as it was before the
/// pass; out-of-bounds neighbours count as wall, so borders drift toward rock.
pub fn smooth(grid: &Grid) -> Grid {
    let mut next = Grid::filled(grid.width(), grid.height(), TileKind::Floor);
    for pos in grid.positions() {
        if grid.wall_neighbours(pos) > WALL_NEIGHBOUR_THRESHOLD {
            next.set(pos, TileKind::Wall);
        }
    }
    next
}

pub fn smooth_passes(grid: Grid, passes: u32) -> Grid {
    (0..passes).fold(grid, |current, _| smooth(&current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pos;

    #[test]
    fn open_grid_closes_only_its_corners() {
        let grid = Grid::filled(3, 3, TileKind::Floor);
        let smoothed = smooth(&grid);
        assert_eq!(smoothed, Grid::parse(&["#.#", "...", "#.#"]).expect("valid fixture"));
    }

    #[test]
    fn four_wall_neighbours_stay_floor_and_five_become_wall() {
        // (1,0) sees three implicit walls plus (2,1); the corner sees five implicit walls.
        let grid = Grid::parse(&[".....", "..#..", ".....", ".....", "....."])
            .expect("valid fixture");
        let smoothed = smooth(&grid);
        assert_eq!(smoothed.tile_at(Pos::new(1, 0)), TileKind::Floor);
        assert_eq!(smoothed.tile_at(Pos::new(0, 0)), TileKind::Wall);
    }

    #[test]
    fn pass_reads_only_the_previous_generation() {
        // Updating in place would turn (0,0) to wall first and push (1,0) to five walls.
        let grid = Grid::parse(&[".....", "..#..", ".....", ".....", "....."])
            .expect("valid fixture");
        let smoothed = smooth(&grid);
        let expected = Grid::parse(&["#...#", ".....", ".....", ".....", "#...#"])
            .expect("valid fixture");
        assert_eq!(smoothed, expected);
    }

    #[test]
    fn enclosed_floor_pocket_fills_in() {
        let grid = Grid::parse(&[
            "#######", //
            "#######",
            "###.###",
            "#######",
            "#######",
        ])
        .expect("valid fixture");
        let smoothed = smooth(&grid);
        assert_eq!(smoothed.count(TileKind::Floor), 0);
    }

    #[test]
    fn single_row_grid_collapses_to_wall() {
        let grid = Grid::filled(6, 1, TileKind::Floor);
        assert_eq!(smooth(&grid).count(TileKind::Wall), 6);
    }

    #[test]
    fn zero_passes_returns_input() {
        let grid = Grid::parse(&["#.", ".#"]).expect("valid fixture");
        assert_eq!(smooth_passes(grid.clone(), 0), grid);
    }

    #[test]
    fn passes_apply_in_sequence() {
        let grid = Grid::parse(&[".#..#.", "..##..", "#....#", ".#.#..", "......"])
            .expect("valid fixture");
        let twice = smooth(&smooth(&grid));
        assert_eq!(smooth_passes(grid, 2), twice);
    }
}
