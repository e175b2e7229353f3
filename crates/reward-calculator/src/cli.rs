use anyhow::{Context, Result};
use clap::Parser;
use reward_calculator::{
    RewardCalculator, RewardInput,
    export::{Exportable, OutputFormat},
    settings::Settings,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "checkpoint-rewards",
    about = "Reference calculation of checkpoint block-reward shares",
    version,
    author,
    allow_negative_numbers = true,
    after_help = r#"Modes:
    BLOCKS_COMMITTED > 0   single-checkpoint delta split between validator and rewarder
    BLOCKS_COMMITTED = 0   compounded delta over CHECKPOINT_PERIOD, no split

Configuration:
    Configuration can be provided via:
    1. Environment variables with REWARDS__ prefix (e.g., REWARDS__SCHEDULE__APY_WAD)
    2. .env file in the current directory
    3. Config file with -c option

Examples:
    # Validator committed half of a 600-block checkpoint over a 1M token supply
    checkpoint-rewards 1000000000000000000000000 600 300

    # Yield over a full day
    checkpoint-rewards 1000000000000000000000000 86400 0"#
)]
pub struct Cli {
    /// Path to the configuration file (TOML format)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the output format
    #[arg(short = 'f', long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Token supply or checkpoint budget in the smallest unit (18 decimals)
    #[arg(value_name = "SUPPLY")]
    pub supply: String,

    /// Checkpoint period in blocks (one block per second)
    #[arg(value_name = "CHECKPOINT_PERIOD")]
    pub checkpoint_period: String,

    /// Blocks the validator committed during the period
    #[arg(value_name = "BLOCKS_COMMITTED")]
    pub blocks_committed: String,
}

impl Cli {
    /// Settings from the config file or environment with command-line overrides applied.
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_path(path)?,
            None => Settings::from_env()?,
        };

        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
        if let Some(format) = self.output_format {
            settings.output_format = format;
        }
        settings.validate()?;

        Ok(settings)
    }

    /// Runs the calculation and renders the result.
    pub fn render(&self, settings: &Settings) -> Result<String> {
        let input = RewardInput::parse(
            &self.supply,
            &self.checkpoint_period,
            &self.blocks_committed,
        )?;
        debug!(?input, "parsed input");

        let output = RewardCalculator::new(settings.schedule.clone())
            .calculate(&input)
            .with_context(|| {
                format!(
                    "Failed to calculate rewards for period {}",
                    input.checkpoint_period
                )
            })?;

        output.export(settings.output_format)
    }
}
