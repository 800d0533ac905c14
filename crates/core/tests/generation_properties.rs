use cave_core::{GenerationConfig, LevelSession, TileKind};
use proptest::prelude::*;

#[test]
fn border_ring_is_denser_in_wall_than_interior() {
    let mut ring_walls = 0_usize;
    let mut ring_cells = 0_usize;
    let mut interior_walls = 0_usize;
    let mut interior_cells = 0_usize;

    for seed in 0..200_u64 {
        let mut session = LevelSession::default();
        let level = session.start_new_run(seed).expect("reference config generates");
        let grid = level.grid();
        for pos in grid.positions() {
            let on_ring = pos.x == 0
                || pos.y == 0
                || pos.x as usize == grid.width() - 1
                || pos.y as usize == grid.height() - 1;
            let is_wall = grid.tile_at(pos) == TileKind::Wall;
            if on_ring {
                ring_cells += 1;
                ring_walls += usize::from(is_wall);
            } else {
                interior_cells += 1;
                interior_walls += usize::from(is_wall);
            }
        }
    }

    let ring_density = ring_walls as f64 / ring_cells as f64;
    let interior_density = interior_walls as f64 / interior_cells as f64;
    assert!(
        ring_density > interior_density,
        "ring wall density {ring_density:.3} should exceed interior {interior_density:.3}"
    );
}

#[test]
fn solid_fill_does_not_hang() {
    let config =
        GenerationConfig { fill_probability: 1.0, max_attempts: 16, ..GenerationConfig::default() };
    let mut session = LevelSession::new(config).expect("config is valid");
    let error =
        session.start_new_run("pathological").expect_err("all-wall grids cannot host a level");
    assert!(error.to_string().contains("16 attempts"), "unexpected error text: {error}");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn start_and_goal_are_in_bounds_floor(seed in ".{0,15}", advances in 0_u32..4) {
        let mut session = LevelSession::default();
        session.start_new_run(seed.as_str()).expect("reference config generates");
        for _ in 0..advances {
            session.advance_level().expect("reference config generates");
        }
        let level = session.level().expect("run is active");
        let grid = level.grid();
        prop_assert!(grid.in_bounds(level.start()));
        prop_assert!(grid.in_bounds(level.goal()));
        prop_assert_eq!(grid.tile_at(level.start()), TileKind::Floor);
        prop_assert_eq!(grid.tile_at(level.goal()), TileKind::Floor);
        prop_assert_eq!(level.depth(), advances + 1);
    }

    #[test]
    fn grid_dimensions_never_change(
        seed in any::<u64>(),
        width in 1_usize..40,
        height in 1_usize..40,
    ) {
        let config = GenerationConfig {
            width,
            height,
            fill_probability: 0.3,
            ..GenerationConfig::default()
        };
        let mut session = LevelSession::new(config).expect("config is valid");
        if let Ok(level) = session.start_new_run(seed) {
            prop_assert_eq!(level.grid().width(), width);
            prop_assert_eq!(level.grid().height(), height);
            prop_assert_eq!(level.grid().tiles().len(), width * height);
        }
    }

    #[test]
    fn same_seed_same_sequence(seed in any::<u64>()) {
        let mut left = LevelSession::default();
        let mut right = LevelSession::default();
        let a = left.start_new_run(seed).expect("generates").fingerprint();
        let b = right.start_new_run(seed).expect("generates").fingerprint();
        prop_assert_eq!(a, b);
        let a = left.advance_level().expect("generates").fingerprint();
        let b = right.advance_level().expect("generates").fingerprint();
        prop_assert_eq!(a, b);
    }
}
