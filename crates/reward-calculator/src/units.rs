use crate::constants::WAD_DECIMALS;
use fixed_point::U256;
use rust_decimal::Decimal;

/// Renders a WAD-scaled amount as whole tokens, e.g. `1.5` for 1.5e18.
///
/// Returns `None` when the amount exceeds the 96-bit decimal mantissa.
pub fn wad_to_tokens(amount: U256) -> Option<Decimal> {
    if amount.bits() > 96 {
        return None;
    }
    Decimal::try_from_i128_with_scale(amount.low_u128() as i128, WAD_DECIMALS)
        .ok()
        .map(|d| d.normalize())
}
