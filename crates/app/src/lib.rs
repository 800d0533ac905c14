use cave_core::SeedChoice;

pub mod app_loop;
pub mod logging;
pub mod seed_input;

pub const APP_NAME: &str = "Cave Explorer";

/// Pixel size of one grid tile on screen.
pub const TILE_SIZE: f32 = 32.0;

/// Depth counter as shown in the corner of the game view.
pub fn format_depth(depth: u32) -> String {
    format!("DEPTH: {depth}0m")
}

/// Seed label for the game view; fallback seeds are marked so they can be noted down.
pub fn format_seed(choice: &SeedChoice) -> String {
    match choice {
        SeedChoice::Entered(seed) => format!("SEED: {seed}"),
        SeedChoice::Generated(seed) => format!("SEED: {seed} (generated)"),
    }
}

#[cfg(test)]
mod tests {
    use cave_core::Seed;

    use super::*;

    #[test]
    fn depth_label_reads_in_tens_of_metres() {
        assert_eq!(format_depth(1), "DEPTH: 10m");
        assert_eq!(format_depth(12), "DEPTH: 120m");
    }

    #[test]
    fn seed_label_shows_entered_seed_verbatim() {
        assert_eq!(format_seed(&SeedChoice::Entered(Seed::from("cave 42"))), "SEED: cave 42");
    }

    #[test]
    fn seed_label_marks_generated_seeds() {
        let choice = SeedChoice::Generated(Seed::from(4821_u64));
        assert_eq!(format_seed(&choice), "SEED: 4821 (generated)");
    }
}
