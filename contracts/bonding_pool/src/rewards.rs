//! Reward accrual.
//!
//! Accrual is a pure function of staked amount and elapsed seconds. It must be
//! non-decreasing in both and pay nothing for zero elapsed time; settlement
//! bookkeeping lives in the contract, not here.

use bonding_errors::PoolError;

use crate::math::{div_i128, mul_i128, BPS_DENOMINATOR};
use crate::types::RewardSchedule;

/// Number of seconds in a year (365 days).
pub const SECONDS_PER_YEAR: u64 = 365 * 86_400;

pub trait Accrual {
    /// Reward owed for holding `amount` for `elapsed` seconds.
    fn accrued(&self, amount: i128, elapsed: u64) -> Result<i128, PoolError>;
}

/// Simple interest: `amount * apr_bps * elapsed / (10_000 * SECONDS_PER_YEAR)`.
impl Accrual for RewardSchedule {
    fn accrued(&self, amount: i128, elapsed: u64) -> Result<i128, PoolError> {
        if amount <= 0 || elapsed == 0 || self.apr_bps == 0 {
            return Ok(0);
        }
        let per_year = mul_i128(amount, self.apr_bps as i128)?;
        let numerator = mul_i128(per_year, elapsed as i128)?;
        div_i128(numerator, BPS_DENOMINATOR * SECONDS_PER_YEAR as i128)
    }
}
