use crate::{
    constants::{
        APY_WAD, CHECKPOINT_INFLATION_RATE, DEFAULT_CHECKPOINT_PERIOD, SECONDS_PER_YEAR, WAD,
    },
    error::{Result, RewardError},
};
use fixed_point::{U256, UD60x18};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inflation schedule the rewards are derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardParams {
    /// Annual percentage yield scaled by 1e18 (5% = 50000000000000000)
    pub apy_wad: u64,
    /// Length of a year in seconds; one block is taken as one second
    pub seconds_per_year: u64,
    /// Checkpoint length the precomputed rate below applies to
    pub checkpoint_period: u64,
    /// Precomputed single-checkpoint yield scaled by 1e18
    pub checkpoint_inflation_rate: u64,
}

impl Default for RewardParams {
    fn default() -> Self {
        Self {
            apy_wad: APY_WAD,
            seconds_per_year: SECONDS_PER_YEAR,
            checkpoint_period: DEFAULT_CHECKPOINT_PERIOD,
            checkpoint_inflation_rate: CHECKPOINT_INFLATION_RATE,
        }
    }
}

impl RewardParams {
    pub fn apy(&self) -> UD60x18 {
        UD60x18::wrap(U256::from(self.apy_wad))
    }

    /// Yield for a single checkpoint of `period` seconds.
    ///
    /// Uses the precomputed rate when `period` is the configured checkpoint
    /// length and the annual schedule is the one the rate was derived from;
    /// compounds the annual yield otherwise.
    pub fn checkpoint_rate(&self, period: u64) -> Result<UD60x18> {
        if self.has_precomputed_rate(period) {
            return Ok(UD60x18::wrap(U256::from(self.checkpoint_inflation_rate)));
        }
        debug!(
            period,
            checkpoint_period = self.checkpoint_period,
            apy_wad = self.apy_wad,
            seconds_per_year = self.seconds_per_year,
            "no precomputed rate for schedule, compounding"
        );
        self.period_yield(period)
    }

    // The precomputed rate is only valid for the APY and year length it was derived from
    fn has_precomputed_rate(&self, period: u64) -> bool {
        period == self.checkpoint_period
            && self.apy_wad == APY_WAD
            && self.seconds_per_year == SECONDS_PER_YEAR
    }

    /// Compounded yield over `period` seconds.
    pub fn period_yield(&self, period: u64) -> Result<UD60x18> {
        compounded_yield(self.apy(), period, self.seconds_per_year)
    }
}

/// `period` as a fraction of a year, `period * 1e18 / seconds_per_year`.
pub fn time_fraction(period: u64, seconds_per_year: u64) -> Result<UD60x18> {
    if seconds_per_year == 0 {
        return Err(RewardError::InvalidParams("seconds per year must be non-zero"));
    }
    Ok(UD60x18::wrap(
        U256::from(period) * WAD / U256::from(seconds_per_year),
    ))
}

/// `(1 + apy) ^ (period / seconds_per_year) - 1` in fixed-point.
pub fn compounded_yield(apy: UD60x18, period: u64, seconds_per_year: u64) -> Result<UD60x18> {
    let base = UD60x18::UNIT
        .checked_add(apy)
        .ok_or(RewardError::Overflow("growth base"))?;
    let exponent = time_fraction(period, seconds_per_year)?;
    let growth = base.pow(exponent)?;

    debug!(%exponent, %growth, "compounded growth factor");

    growth
        .checked_sub(UD60x18::UNIT)
        .ok_or(RewardError::Overflow("yield rate"))
}
