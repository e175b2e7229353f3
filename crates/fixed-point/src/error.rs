use primitive_types::U256;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixedPointError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixedPointError {
    #[error("log input {0} is below the unit value")]
    LogInputTooSmall(U256),
    #[error("exp2 input {0} exceeds the 192.64-bit range")]
    Exp2InputTooBig(U256),
    #[error("mul_div result overflows 256 bits: {x} * {y} / {denominator}")]
    MulDivOverflow {
        x: U256,
        y: U256,
        denominator: U256,
    },
    #[error("invalid unsigned decimal number: {0:?}")]
    InvalidNumber(String),
    #[error("division by zero")]
    DivisionByZero,
}
