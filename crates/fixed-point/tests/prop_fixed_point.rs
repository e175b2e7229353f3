use fixed_point::{U256, UD60x18};
use proptest::prelude::*;

const UNIT: u128 = 1_000_000_000_000_000_000;

fn to_f64(value: UD60x18) -> f64 {
    value.into_raw().low_u128() as f64 / UNIT as f64
}

proptest! {
    #[test]
    fn log2_is_monotonic(x in UNIT..1_000_000 * UNIT, step in 0u128..UNIT) {
        let lo = UD60x18::from_raw(x).log2().unwrap();
        let hi = UD60x18::from_raw(x + step).log2().unwrap();
        prop_assert!(lo <= hi);
    }

    #[test]
    fn pow_tracks_floating_point(base in UNIT + 1..100 * UNIT, exp in 0u128..5 * UNIT) {
        let x = UD60x18::from_raw(base);
        let y = UD60x18::from_raw(exp);
        let fixed = to_f64(x.pow(y).unwrap());
        let float = (base as f64 / UNIT as f64).powf(exp as f64 / UNIT as f64);
        prop_assert!(((fixed - float) / float).abs() < 1e-9, "fixed={fixed} float={float}");
    }

    #[test]
    fn pow_of_fraction_stays_below_one(base in UNIT / 1000..UNIT, exp in UNIT / 100..3 * UNIT) {
        let result = UD60x18::from_raw(base).pow(UD60x18::from_raw(exp)).unwrap();
        prop_assert!(result <= UD60x18::UNIT);
    }

    #[test]
    fn mul_by_unit_is_identity(raw in any::<u128>()) {
        let x = UD60x18::from_raw(raw);
        prop_assert_eq!(x.mul(UD60x18::UNIT).unwrap(), x);
    }
}

#[test]
fn pow_year_fraction_of_five_percent() {
    // 600 seconds out of a 365-day year
    let time_fraction =
        UD60x18::wrap(U256::from(600u64) * U256::exp10(18) / U256::from(31_536_000u64));
    let growth = UD60x18::from_raw(1_050_000_000_000_000_000)
        .pow(time_fraction)
        .unwrap();
    assert_eq!(growth, UD60x18::from_raw(1_000_000_928_276_004_847));
}
