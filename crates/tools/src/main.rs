use std::path::PathBuf;

use anyhow::{Context, Result};
use cave_core::{Level, LevelSession, Pos, SeedChoice, generate_fallback_seed, resolve_seed};
use cave_tools::logging;
use clap::{Parser, ValueEnum};
use serde::Serialize;

mod config;

use config::{ConfigOverrides, resolve_config};

#[derive(Parser)]
#[command(author, version, about = "Preview seeded cave levels", long_about = None)]
struct Args {
    /// Run seed; a four-digit seed is generated when omitted
    #[arg(short, long, default_value = "")]
    seed: String,
    /// Number of consecutive levels to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    levels: u32,
    /// TOML file with generation settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
    #[command(flatten)]
    overrides: ConfigOverrides,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
    Fingerprint,
}

#[derive(Serialize)]
struct LevelReport<'a> {
    seed: &'a str,
    seed_generated: bool,
    depth: u32,
    start: Pos,
    goal: Pos,
    fingerprint: String,
    rows: Vec<String>,
}

impl<'a> LevelReport<'a> {
    fn new(choice: &'a SeedChoice, level: &Level) -> Self {
        Self {
            seed: choice.seed().as_str(),
            seed_generated: choice.is_generated(),
            depth: level.depth(),
            start: level.start(),
            goal: level.goal(),
            fingerprint: format_fingerprint(level.fingerprint()),
            rows: level.grid().to_string().lines().map(str::to_owned).collect(),
        }
    }
}

fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}

fn seed_label(choice: &SeedChoice) -> String {
    if choice.is_generated() {
        format!("{} (generated)", choice.seed())
    } else {
        choice.seed().to_string()
    }
}

fn print_level(format: OutputFormat, choice: &SeedChoice, level: &Level) -> Result<()> {
    match format {
        OutputFormat::Ascii => {
            println!("Seed: {}  Depth: {}", seed_label(choice), level.depth());
            print!("{}", level.render_ascii());
            println!();
        }
        OutputFormat::Json => {
            let report = LevelReport::new(choice, level);
            let json =
                serde_json::to_string(&report).context("Failed to serialize level report")?;
            println!("{json}");
        }
        OutputFormat::Fingerprint => {
            println!("{} {}", level.depth(), format_fingerprint(level.fingerprint()));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref(), &args.overrides)?;
    let choice = resolve_seed(&args.seed, generate_fallback_seed);
    let seed = choice.seed();

    let mut session = LevelSession::new(config).context("Invalid generation config")?;
    let level = session
        .start_new_run(seed.clone())
        .with_context(|| format!("Failed to generate depth 1 for seed '{seed}'"))?;
    print_level(args.format, &choice, level)?;

    for _ in 1..args.levels {
        let level = session.advance_level().context("Failed to generate next level")?;
        print_level(args.format, &choice, level)?;
    }

    Ok(())
}
