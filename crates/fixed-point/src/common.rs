//! Integer primitives shared by the fixed-point types.

use crate::error::{FixedPointError, Result};
use primitive_types::{U256, U512};

/// 1e18, the scale of a 60.18-decimal fixed-point number.
pub const UNIT: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// `round(2^(2^-k) * 2^64)` for k = 1..=64, in 64.64-bit fixed-point.
///
/// Entry `i` is applied when bit `63 - i` of the fractional input is set.
const EXP2_FACTORS: [u128; 64] = [
    0x16A09E667F3BCC909,
    0x1306FE0A31B7152DF,
    0x1172B83C7D517ADCE,
    0x10B5586CF9890F62A,
    0x1059B0D31585743AE,
    0x102C9A3E778060EE7,
    0x10163DA9FB33356D8,
    0x100B1AFA5ABCBED61,
    0x10058C86DA1C09EA2,
    0x1002C605E2E8CEC50,
    0x100162F3904051FA1,
    0x1000B175EFFDC76BA,
    0x100058BA01FB9F96D,
    0x10002C5CC37DA9492,
    0x1000162E525EE0547,
    0x10000B17255775C04,
    0x1000058B91B5BC9AE,
    0x100002C5C89D5EC6D,
    0x10000162E43F4F831,
    0x100000B1721BCFC9A,
    0x10000058B90CF1E6E,
    0x1000002C5C863B73F,
    0x100000162E430E5A2,
    0x1000000B172183551,
    0x100000058B90C0B49,
    0x10000002C5C8601CC,
    0x1000000162E42FFF0,
    0x10000000B17217FBB,
    0x1000000058B90BFCE,
    0x100000002C5C85FE3,
    0x10000000162E42FF1,
    0x100000000B17217F8,
    0x10000000058B90BFC,
    0x1000000002C5C85FE,
    0x100000000162E42FF,
    0x1000000000B17217F,
    0x100000000058B90C0,
    0x10000000002C5C860,
    0x1000000000162E430,
    0x10000000000B17218,
    0x1000000000058B90C,
    0x100000000002C5C86,
    0x10000000000162E43,
    0x100000000000B1721,
    0x10000000000058B91,
    0x1000000000002C5C8,
    0x100000000000162E4,
    0x1000000000000B172,
    0x100000000000058B9,
    0x10000000000002C5D,
    0x1000000000000162E,
    0x10000000000000B17,
    0x1000000000000058C,
    0x100000000000002C6,
    0x10000000000000163,
    0x100000000000000B1,
    0x10000000000000059,
    0x1000000000000002C,
    0x10000000000000016,
    0x1000000000000000B,
    0x10000000000000006,
    0x10000000000000003,
    0x10000000000000001,
    0x10000000000000001,
];

/// Computes `floor(x * y / denominator)` with a 512-bit intermediate product.
pub fn mul_div(x: U256, y: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(FixedPointError::DivisionByZero);
    }
    let quotient = x.full_mul(y) / U512::from(denominator);
    U256::try_from(quotient).map_err(|_| FixedPointError::MulDivOverflow { x, y, denominator })
}

/// `floor(x * y / 1e18)`.
pub fn mul_div18(x: U256, y: U256) -> Result<U256> {
    mul_div(x, y, UNIT)
}

/// Index of the most significant set bit. Zero for an input of zero.
pub fn msb(x: U256) -> u32 {
    (x.bits() as u32).saturating_sub(1)
}

/// Binary exponent of a 192.64-bit fixed-point number, returned as a
/// 60.18-decimal fixed-point number.
///
/// Callers must keep the integer part of `x` below 192.
pub fn exp2_192x64(x: U256) -> U256 {
    // 2^191 stands for 0.5 in the shifted representation.
    let mut result = U256::one() << 191;

    for (i, factor) in EXP2_FACTORS.iter().enumerate() {
        if x.bit(63 - i) {
            result = (result * U256::from(*factor)) >> 64;
        }
    }

    let integer_part = (x >> 64).low_u64() as usize;
    (result * UNIT) >> (191 - integer_part)
}
