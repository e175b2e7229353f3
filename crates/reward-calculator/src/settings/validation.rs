use crate::settings::Settings;
use anyhow::{Result, bail};

/// Validate the configuration values
pub fn validate_config(settings: &Settings) -> Result<()> {
    let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_log_levels.contains(&settings.log_level.to_lowercase().as_str()) {
        bail!(
            "Invalid log level '{}'. Valid options are: {:?}",
            settings.log_level,
            valid_log_levels
        );
    }

    let schedule = &settings.schedule;
    if schedule.apy_wad == 0 {
        bail!("Schedule apy_wad must be greater than 0");
    }
    if schedule.seconds_per_year == 0 {
        bail!("Schedule seconds_per_year must be greater than 0");
    }
    if schedule.checkpoint_period == 0 {
        bail!("Schedule checkpoint_period must be greater than 0");
    }
    if schedule.checkpoint_inflation_rate == 0 {
        bail!("Schedule checkpoint_inflation_rate must be greater than 0");
    }

    Ok(())
}
