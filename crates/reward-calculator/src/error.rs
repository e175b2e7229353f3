use fixed_point::FixedPointError;
use thiserror::Error;

pub type Result<T = ()> = std::result::Result<T, RewardError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewardError {
    #[error("checkpoint period must be greater than zero")]
    ZeroCheckpointPeriod,
    #[error("blocks committed ({blocks}) exceed the checkpoint period ({period})")]
    BlocksExceedPeriod { blocks: u64, period: u64 },
    #[error("invalid {field} '{value}': expected a non-negative base-10 integer")]
    InvalidAmount { field: &'static str, value: String },
    #[error("invalid reward parameters: {0}")]
    InvalidParams(&'static str),
    #[error("arithmetic overflow computing {0}")]
    Overflow(&'static str),
    #[error("fixed-point error: {0}")]
    FixedPoint(#[from] FixedPointError),
}
