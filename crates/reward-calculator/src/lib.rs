//! Reference oracle for checkpoint block rewards.
//!
//! Converts an annual yield into the tokens minted over a checkpoint and splits
//! them between the reporting validator and the rewarder pool, using integer
//! fixed-point arithmetic that matches the on-chain contract bit for bit.

pub mod calculator;
pub mod constants;
pub mod error;
pub mod export;
pub mod serializer;
pub mod settings;
pub mod types;
pub mod units;
pub mod yield_rate;

pub use calculator::{RewardCalculator, split_shares, supply_delta};
pub use error::{Result, RewardError};
pub use types::{CalculationMode, RewardInput, RewardOutput, RewardShares};
pub use yield_rate::RewardParams;

/// Calculates rewards with the default inflation schedule.
pub fn calculate_rewards(input: &RewardInput) -> Result<RewardOutput> {
    RewardCalculator::default().calculate(input)
}
