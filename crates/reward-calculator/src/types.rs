use crate::{
    error::{Result, RewardError},
    serializer::{serialize_opt_u256, serialize_u256},
};
use fixed_point::U256;
use serde::Serialize;
use std::fmt;

/// Which breakdown a calculation produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationMode {
    /// Single-checkpoint delta split between validator and rewarder
    Checkpoint,
    /// Compounded delta over the whole period, no split
    Period,
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkpoint => write!(f, "checkpoint"),
            Self::Period => write!(f, "period"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardInput {
    /// Token supply or checkpoint budget in the smallest unit (18 decimals)
    pub supply: U256,
    pub checkpoint_period: u64,
    pub blocks_committed: u64,
}

impl RewardInput {
    pub fn new(supply: U256, checkpoint_period: u64, blocks_committed: u64) -> Self {
        Self {
            supply,
            checkpoint_period,
            blocks_committed,
        }
    }

    /// Parses base-10 command-line arguments.
    pub fn parse(supply: &str, checkpoint_period: &str, blocks_committed: &str) -> Result<Self> {
        Ok(Self {
            supply: parse_u256("supply", supply)?,
            checkpoint_period: parse_u64("checkpoint period", checkpoint_period)?,
            blocks_committed: parse_u64("blocks committed", blocks_committed)?,
        })
    }

    /// Zero committed blocks asks for the whole-period yield only.
    pub fn mode(&self) -> CalculationMode {
        if self.blocks_committed == 0 {
            CalculationMode::Period
        } else {
            CalculationMode::Checkpoint
        }
    }
}

fn is_plain_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_u256(field: &'static str, value: &str) -> Result<U256> {
    let invalid = || RewardError::InvalidAmount {
        field,
        value: value.to_string(),
    };
    if !is_plain_digits(value) {
        return Err(invalid());
    }
    U256::from_dec_str(value).map_err(|_| invalid())
}

fn parse_u64(field: &'static str, value: &str) -> Result<u64> {
    let invalid = || RewardError::InvalidAmount {
        field,
        value: value.to_string(),
    };
    if !is_plain_digits(value) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

/// Validator and rewarder portions of a supply delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardShares {
    pub validator: U256,
    pub rewarder: U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardOutput {
    #[serde(skip)]
    pub mode: CalculationMode,
    #[serde(serialize_with = "serialize_u256")]
    pub supply_delta: U256,
    #[serde(
        serialize_with = "serialize_opt_u256",
        skip_serializing_if = "Option::is_none"
    )]
    pub validator_share: Option<U256>,
    #[serde(
        serialize_with = "serialize_opt_u256",
        skip_serializing_if = "Option::is_none"
    )]
    pub rewarder_share: Option<U256>,
    #[serde(
        serialize_with = "serialize_opt_u256",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_tokens: Option<U256>,
}

impl RewardOutput {
    pub fn checkpoint(supply_delta: U256, shares: RewardShares) -> Self {
        Self {
            mode: CalculationMode::Checkpoint,
            supply_delta,
            validator_share: Some(shares.validator),
            rewarder_share: Some(shares.rewarder),
            total_tokens: None,
        }
    }

    /// No blocks were committed, so the validator's share is zero and the
    /// delta is not split.
    pub fn period(supply_delta: U256, total_tokens: U256) -> Self {
        Self {
            mode: CalculationMode::Period,
            supply_delta,
            validator_share: Some(U256::zero()),
            rewarder_share: None,
            total_tokens: Some(total_tokens),
        }
    }
}
