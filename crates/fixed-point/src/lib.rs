//! Unsigned 60.18-decimal fixed-point arithmetic.
//!
//! Values are 256-bit integers scaled by 1e18. Logarithm, exponent and power
//! functions reproduce the integer algorithms used by on-chain UD60x18 math,
//! including where and how every intermediate result is truncated, so an
//! off-chain caller can predict a contract's output exactly.

pub mod common;
pub mod error;
pub mod ud60x18;

pub use error::{FixedPointError, Result};
pub use primitive_types::U256;
pub use ud60x18::UD60x18;
