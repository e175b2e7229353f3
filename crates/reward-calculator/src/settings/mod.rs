pub mod validation;

use crate::{export::OutputFormat, yield_rate::RewardParams};
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};
use validation::validate_config;

/// Settings for the checkpoint-rewards oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Log level for application logging (e.g., "info", "debug", "warn", "error")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Format the result is printed in
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Inflation schedule
    #[serde(default)]
    pub schedule: RewardParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            output_format: OutputFormat::default(),
            schedule: RewardParams::default(),
        }
    }
}

// stdout carries the result, so only warnings and errors are logged by default
fn default_log_level() -> String {
    "warn".to_string()
}

fn env_source() -> Environment {
    Environment::with_prefix("REWARDS")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from a specific config file path.
    ///
    /// Values are not validated here, see [`Settings::validate`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        // Env vars take priority over the file
        let settings = ConfigBuilder::builder()
            .add_source(File::with_name(&path.as_ref().to_string_lossy()))
            .add_source(env_source())
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Ok(settings)
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        // NOTE: It's ok if this fails (file might not exist)
        let _ = dotenvy::dotenv();

        let settings: Settings = ConfigBuilder::builder()
            .add_source(env_source())
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        Ok(settings)
    }

    /// Check the loaded values; call again after applying any overrides
    pub fn validate(&self) -> Result<()> {
        validate_config(self)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{\n\
             \tLog Level: {}\n\
             \tOutput Format: {}\n\
             \tAPY (wad): {}\n\
             \tSeconds Per Year: {}\n\
             \tCheckpoint Period: {}\n\
             \tCheckpoint Inflation Rate (wad): {}\n\
             }}",
            self.log_level,
            self.output_format,
            self.schedule.apy_wad,
            self.schedule.seconds_per_year,
            self.schedule.checkpoint_period,
            self.schedule.checkpoint_inflation_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{APY_WAD, SECONDS_PER_YEAR};
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_from_path_partial_overrides() {
        let file = write_config(
            r#"
log_level = "debug"
output_format = "json-pretty"

[schedule]
checkpoint_period = 3600
"#,
        );

        let settings = Settings::from_path(file.path()).unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.output_format, OutputFormat::JsonPretty);
        assert_eq!(settings.schedule.checkpoint_period, 3600);
        assert_eq!(settings.schedule.apy_wad, APY_WAD);
        assert_eq!(settings.schedule.seconds_per_year, SECONDS_PER_YEAR);
    }

    #[test]
    fn test_invalid_values_rejected_after_loading() {
        let file = write_config(
            r#"
[schedule]
seconds_per_year = 0
"#,
        );
        let settings = Settings::from_path(file.path()).unwrap();
        assert_eq!(settings.schedule.seconds_per_year, 0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        assert!(Settings::from_path("/nonexistent/checkpoint-rewards.toml").is_err());
    }

    #[test]
    fn test_display() {
        let rendered = Settings::default().to_string();
        assert!(rendered.contains("Checkpoint Period: 600"));
        assert!(rendered.contains("Log Level: warn"));
    }
}
