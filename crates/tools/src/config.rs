//! TOML generation settings for the command-line tools.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cave_core::GenerationConfig;
use clap::Args;

/// Command-line overrides layered on top of the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Grid width in tiles
    #[arg(long)]
    pub width: Option<usize>,
    /// Grid height in tiles
    #[arg(long)]
    pub height: Option<usize>,
    /// Probability that a noise cell starts as wall
    #[arg(long)]
    pub fill: Option<f64>,
    /// Number of smoothing passes
    #[arg(long)]
    pub passes: Option<u32>,
    /// Generation attempts before giving up on a level
    #[arg(long)]
    pub max_attempts: Option<u32>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut GenerationConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fill) = self.fill {
            config.fill_probability = fill;
        }
        if let Some(passes) = self.passes {
            config.smoothing_passes = passes;
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
    }
}

pub fn parse_config(content: &str) -> Result<GenerationConfig> {
    toml::from_str(content).context("Failed to parse generation config TOML")
}

/// Defaults, then the file at `path` if given, then `overrides`. The result is validated.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<GenerationConfig> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            parse_config(&content)?
        }
        None => GenerationConfig::default(),
    };
    overrides.apply(&mut config);
    config.validate().context("Invalid generation config")?;
    Ok(config)
}
