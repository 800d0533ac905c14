use anyhow::{Result, bail};
use cave_core::{LevelSession, Pos, TileKind};
use cave_tools::logging;
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const STEPS: [Pos; 4] = [Pos::new(0, -1), Pos::new(0, 1), Pos::new(-1, 0), Pos::new(1, 0)];

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of runs, each with its own derived seed
    #[arg(short, long, default_value_t = 200)]
    runs: u32,
    /// Random-walk steps taken per run
    #[arg(short = 't', long, default_value_t = 2000)]
    steps: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    println!(
        "Starting fuzz harness on seed {} for {} runs of {} steps...",
        args.seed, args.runs, args.steps
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut deepest = 0;

    for _ in 0..args.runs {
        let run_seed = rng.next_u64().to_string();
        let mut session = LevelSession::default();
        let mut player = session.start_new_run(run_seed.as_str())?.start();

        for _ in 0..args.steps {
            let Some(level) = session.level() else {
                bail!("run for seed {run_seed} lost its level");
            };
            if level.is_goal(player) {
                let depth = level.depth();
                let next = session.advance_level()?;
                if depth.checked_add(1) != Some(next.depth()) {
                    bail!("depth jumped from {depth} to {} (seed {run_seed})", next.depth());
                }
                player = next.start();
                continue;
            }

            let delta = choose(&mut rng, &STEPS);
            if session.is_valid_move(player, delta) {
                let Some(next) = player.offset(delta) else {
                    bail!("valid move left the grid from {player:?} (seed {run_seed})");
                };
                player = next;
            }

            // Invariants
            let Some(level) = session.level() else {
                bail!("run for seed {run_seed} lost its level");
            };
            let grid = level.grid();
            if grid.tile_at(player) != TileKind::Floor {
                bail!("player walked into rock at {player:?} (seed {run_seed})");
            }
            if grid.tile_at(level.start()) != TileKind::Floor
                || grid.tile_at(level.goal()) != TileKind::Floor
            {
                bail!("start or goal placed on rock (seed {run_seed})");
            }
        }

        deepest = deepest.max(session.depth().unwrap_or(0));
    }

    println!("Fuzzing completed successfully. Deepest level reached: {deepest}");
    Ok(())
}
