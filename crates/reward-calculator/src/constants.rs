use fixed_point::U256;

// 1e18, fixed-point scale of token amounts and rates
pub const WAD: U256 = fixed_point::common::UNIT;
pub const WAD_DECIMALS: u32 = 18;

// 365 days
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

// 5% annual yield, scaled by WAD
pub const APY_WAD: u64 = 50_000_000_000_000_000;

// One checkpoint every 600 blocks, 1 block ~ 1 second
pub const DEFAULT_CHECKPOINT_PERIOD: u64 = 600;

// Single-checkpoint yield for DEFAULT_CHECKPOINT_PERIOD at APY_WAD, as embedded
// in the on-chain rewarder. Scaled by WAD.
pub const CHECKPOINT_INFLATION_RATE: u64 = 928_276_004_952;
