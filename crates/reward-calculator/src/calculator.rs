use crate::{
    error::{Result, RewardError},
    types::{CalculationMode, RewardInput, RewardOutput, RewardShares},
    units::wad_to_tokens,
    yield_rate::RewardParams,
};
use fixed_point::{U256, UD60x18, common::mul_div};
use tracing::{debug, info};

/// Computes newly minted tokens for a checkpoint and the validator's part of them.
///
/// Every step floors and no product is reassociated, so results match the
/// on-chain rewarder to the last wei. The calculator holds no mutable state and
/// can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct RewardCalculator {
    params: RewardParams,
}

impl RewardCalculator {
    pub fn new(params: RewardParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RewardParams {
        &self.params
    }

    pub fn calculate(&self, input: &RewardInput) -> Result<RewardOutput> {
        if input.checkpoint_period == 0 {
            return Err(RewardError::ZeroCheckpointPeriod);
        }

        let output = match input.mode() {
            CalculationMode::Checkpoint => self.checkpoint_rewards(input)?,
            CalculationMode::Period => self.period_rewards(input)?,
        };

        info!(
            mode = %output.mode,
            supply_delta = %output.supply_delta,
            supply_delta_tokens = ?wad_to_tokens(output.supply_delta),
            "rewards calculated"
        );

        Ok(output)
    }

    fn checkpoint_rewards(&self, input: &RewardInput) -> Result<RewardOutput> {
        let rate = self.params.checkpoint_rate(input.checkpoint_period)?;
        let delta = supply_delta(input.supply, rate)?;
        let shares = split_shares(delta, input.blocks_committed, input.checkpoint_period)?;

        debug!(
            %rate,
            validator_share = %shares.validator,
            rewarder_share = %shares.rewarder,
            "checkpoint split"
        );

        Ok(RewardOutput::checkpoint(delta, shares))
    }

    fn period_rewards(&self, input: &RewardInput) -> Result<RewardOutput> {
        let rate = self.params.period_yield(input.checkpoint_period)?;
        let delta = supply_delta(input.supply, rate)?;
        let total = input
            .supply
            .checked_add(delta)
            .ok_or(RewardError::Overflow("total tokens"))?;

        debug!(%rate, total_tokens = %total, "period yield");

        Ok(RewardOutput::period(delta, total))
    }
}

/// `supply * rate / 1e18`
pub fn supply_delta(supply: U256, rate: UD60x18) -> Result<U256> {
    Ok(UD60x18::wrap(supply).mul(rate)?.into_raw())
}

/// Splits `supply_delta` by the fraction of the period's blocks the validator
/// committed.
///
/// The rewarder receives the remainder, so the two shares always sum to
/// `supply_delta` exactly.
pub fn split_shares(supply_delta: U256, blocks_committed: u64, period: u64) -> Result<RewardShares> {
    if period == 0 {
        return Err(RewardError::ZeroCheckpointPeriod);
    }
    if blocks_committed > period {
        return Err(RewardError::BlocksExceedPeriod {
            blocks: blocks_committed,
            period,
        });
    }

    let validator = mul_div(U256::from(blocks_committed), supply_delta, U256::from(period))?;
    let rewarder = supply_delta - validator;

    Ok(RewardShares {
        validator,
        rewarder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CHECKPOINT_INFLATION_RATE;

    fn million_tokens() -> U256 {
        U256::exp10(24)
    }

    #[test]
    fn test_supply_delta() {
        let rate = UD60x18::from_raw(CHECKPOINT_INFLATION_RATE as u128);
        assert_eq!(
            supply_delta(million_tokens(), rate).unwrap(),
            U256::from(928_276_004_952_000_000u64)
        );
        assert_eq!(supply_delta(U256::zero(), rate).unwrap(), U256::zero());
    }

    #[test]
    fn test_split_shares_floors_validator() {
        let shares = split_shares(U256::from(1000), 1, 3).unwrap();
        assert_eq!(shares.validator, U256::from(333));
        assert_eq!(shares.rewarder, U256::from(667));
    }

    #[test]
    fn test_split_shares_full_commit() {
        let shares = split_shares(U256::from(1000), 600, 600).unwrap();
        assert_eq!(shares.validator, U256::from(1000));
        assert_eq!(shares.rewarder, U256::zero());
    }

    #[test]
    fn test_split_shares_rejects_excess_blocks() {
        assert_eq!(
            split_shares(U256::from(1000), 601, 600),
            Err(RewardError::BlocksExceedPeriod {
                blocks: 601,
                period: 600
            })
        );
    }

    #[test]
    fn test_split_shares_rejects_zero_period() {
        assert_eq!(
            split_shares(U256::from(1000), 0, 0),
            Err(RewardError::ZeroCheckpointPeriod)
        );
    }

    #[test]
    fn test_calculate_zero_period() {
        let calculator = RewardCalculator::default();
        for blocks in [0, 1] {
            let input = RewardInput::new(million_tokens(), 0, blocks);
            assert_eq!(
                calculator.calculate(&input),
                Err(RewardError::ZeroCheckpointPeriod)
            );
        }
    }

    #[test]
    fn test_calculate_uses_configured_params() {
        let calculator = RewardCalculator::new(RewardParams {
            checkpoint_inflation_rate: 1_000_000_000_000,
            ..RewardParams::default()
        });
        let output = calculator
            .calculate(&RewardInput::new(million_tokens(), 600, 600))
            .unwrap();
        assert_eq!(output.supply_delta, U256::exp10(18));
    }
}
