use crate::{
    common::{UNIT as RAW_UNIT, exp2_192x64, msb, mul_div18},
    error::{FixedPointError, Result},
};
use primitive_types::U256;
use std::{fmt, str::FromStr};

const HALF_UNIT: U256 = U256([500_000_000_000_000_000, 0, 0, 0]);
const DOUBLE_UNIT: U256 = U256([2_000_000_000_000_000_000, 0, 0, 0]);
/// 1e36
const UNIT_SQUARED: U256 = U256([12_919_594_847_110_692_864, 54_210_108_624_275_221, 0, 0]);
/// 192e18 - 1
const EXP2_MAX_INPUT: U256 = U256([7_532_559_262_904_483_839, 10, 0, 0]);

/// Unsigned 60.18-decimal fixed-point number.
///
/// The raw value is the real number scaled by 1e18. Every operation floors,
/// matching the rounding of the on-chain library so results agree to the last
/// wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UD60x18(U256);

impl UD60x18 {
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));
    pub const UNIT: Self = Self(RAW_UNIT);
    pub const MAX: Self = Self(U256::MAX);

    pub const fn wrap(raw: U256) -> Self {
        Self(raw)
    }

    pub const fn into_raw(self) -> U256 {
        self.0
    }

    /// Builds a fixed-point value from an already scaled `u128`.
    pub fn from_raw(raw: u128) -> Self {
        Self(U256::from(raw))
    }

    /// Converts a whole number into fixed-point, e.g. `3` into `3e18`.
    pub fn from_integer(value: u64) -> Self {
        Self(U256::from(value) * RAW_UNIT)
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// `floor(self * rhs / 1e18)`
    pub fn mul(self, rhs: Self) -> Result<Self> {
        mul_div18(self.0, rhs.0).map(Self)
    }

    /// Binary logarithm. Fails for inputs below one.
    pub fn log2(self) -> Result<Self> {
        let x = self.0;
        if x < RAW_UNIT {
            return Err(FixedPointError::LogInputTooSmall(x));
        }

        let n = msb(x / RAW_UNIT);
        let mut result = U256::from(n) * RAW_UNIT;

        // y = x * 2^-n lies in [1, 2)
        let mut y = x >> n as usize;
        if y == RAW_UNIT {
            return Ok(Self(result));
        }

        let mut delta = HALF_UNIT;
        while !delta.is_zero() {
            y = (y * y) / RAW_UNIT;
            if y >= DOUBLE_UNIT {
                result += delta;
                y = y >> 1;
            }
            delta = delta >> 1;
        }

        Ok(Self(result))
    }

    /// Binary exponent. Fails for inputs of 192 or more.
    pub fn exp2(self) -> Result<Self> {
        let x = self.0;
        if x > EXP2_MAX_INPUT {
            return Err(FixedPointError::Exp2InputTooBig(x));
        }

        let x_192x64 = (x << 64) / RAW_UNIT;
        Ok(Self(exp2_192x64(x_192x64)))
    }

    /// `self ^ y` via `2^(log2(self) * y)`.
    ///
    /// Bases below one go through their reciprocal so the logarithm stays
    /// non-negative.
    pub fn pow(self, y: Self) -> Result<Self> {
        if self.is_zero() {
            return Ok(if y.is_zero() { Self::UNIT } else { Self::ZERO });
        } else if self == Self::UNIT {
            return Ok(Self::UNIT);
        }

        if y.is_zero() {
            return Ok(Self::UNIT);
        } else if y == Self::UNIT {
            return Ok(self);
        }

        if self > Self::UNIT {
            self.log2()?.mul(y)?.exp2()
        } else {
            let inverse = Self(UNIT_SQUARED / self.0);
            let w = inverse.log2()?.mul(y)?.exp2()?;
            if w.is_zero() {
                return Err(FixedPointError::DivisionByZero);
            }
            Ok(Self(UNIT_SQUARED / w.0))
        }
    }
}

impl From<U256> for UD60x18 {
    fn from(raw: U256) -> Self {
        Self(raw)
    }
}

impl From<UD60x18> for U256 {
    fn from(value: UD60x18) -> Self {
        value.0
    }
}

impl FromStr for UD60x18 {
    type Err = FixedPointError;

    /// Parses the raw scaled value in base 10.
    fn from_str(s: &str) -> Result<Self> {
        U256::from_dec_str(s)
            .map(Self)
            .map_err(|_| FixedPointError::InvalidNumber(s.to_string()))
    }
}

impl fmt::Display for UD60x18 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
