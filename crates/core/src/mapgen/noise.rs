//! Bernoulli wall/floor noise.

use crate::types::TileKind;

use super::grid::Grid;
use super::rng::RunRng;

/// One draw per cell in row-major order; a draw below `fill_probability` makes a wall.
pub fn generate_noise(
    rng: &mut RunRng,
    width: usize,
    height: usize,
    fill_probability: f64,
) -> Grid {
    let mut grid = Grid::filled(width, height, TileKind::Floor);
    for pos in grid.positions() {
        if rng.next_float() < fill_probability {
            grid.set(pos, TileKind::Wall);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    #[test]
    fn zero_probability_is_all_floor_and_one_is_all_wall() {
        let mut rng = RunRng::initialize(&Seed::from("noise"));
        let open = generate_noise(&mut rng, 25, 15, 0.0);
        assert_eq!(open.count(TileKind::Floor), 25 * 15);

        let solid = generate_noise(&mut rng, 25, 15, 1.0);
        assert_eq!(solid.count(TileKind::Wall), 25 * 15);
    }

    #[test]
    fn cells_follow_row_major_draw_order() {
        let seed = Seed::from("order");
        let mut reference = RunRng::initialize(&seed);
        let draws: Vec<f64> = (0..12).map(|_| reference.next_float()).collect();

        let mut rng = RunRng::initialize(&seed);
        let grid = generate_noise(&mut rng, 4, 3, 0.5);
        for (cell, draw) in grid.tiles().iter().zip(&draws) {
            let expected = if *draw < 0.5 { TileKind::Wall } else { TileKind::Floor };
            assert_eq!(*cell, expected);
        }
    }

    #[test]
    fn consumes_exactly_one_draw_per_cell() {
        let seed = Seed::from("budget");
        let mut rng = RunRng::initialize(&seed);
        generate_noise(&mut rng, 5, 4, 0.45);

        let mut reference = RunRng::initialize(&seed);
        for _ in 0..20 {
            reference.next_float();
        }
        assert_eq!(rng.next_float().to_bits(), reference.next_float().to_bits());
    }

    #[test]
    fn reference_fill_produces_roughly_expected_wall_share() {
        let mut rng = RunRng::initialize(&Seed::from("density"));
        let grid = generate_noise(&mut rng, 100, 100, 0.45);
        let share = grid.count(TileKind::Wall) as f64 / 10_000.0;
        assert!((0.40..0.50).contains(&share), "wall share {share} far from 0.45");
    }
}
