//! Fixed-point and calendar constants shared by the quoting arithmetic

use alloy_primitives::U256;

/// Precision-preserving factor applied before integer division in the yield
/// projection. Not a currency amount.
pub const SCALING_FACTOR: U256 = U256::from_limbs([1_000_000_000, 0, 0, 0]);

/// Seconds in a 365-day year, used to annualize an interest delta.
pub const SECONDS_PER_YEAR: u64 = 60 * 60 * 24 * 365;
