//! Lock Duration and Parameter Validation
//!
//! Every position must be locked for a meaningful period, and every bond mode
//! must carry a discount that can be expressed in basis points.
//!
//! ## Constraints
//! - **Deposit Lock**: at least 1 day (86_400 seconds). A one-hour lock is
//!   rejected. No upper bound.
//! - **Mode Lock**: any non-zero duration.
//! - **Discount**: 0..=10_000 basis points.
//! - **APR**: at most `MAX_APR_BPS`.

use bonding_errors::PoolError;

/// Minimum deposit lock in seconds (1 day = 86_400 seconds).
pub const MIN_LOCK_SECS: u64 = 86_400;

/// Maximum discount: the whole price.
pub const MAX_DISCOUNT_BPS: u32 = 10_000;

/// Maximum reward rate (500% APR).
pub const MAX_APR_BPS: u32 = 50_000;

/// Validate a caller-chosen deposit lock.
///
/// # Errors
/// * `InvalidDuration` if `lock_secs` < `MIN_LOCK_SECS`
pub fn validate_deposit_lock(lock_secs: u64) -> Result<(), PoolError> {
    if lock_secs < MIN_LOCK_SECS {
        return Err(PoolError::InvalidDuration);
    }
    Ok(())
}

/// Validate the lock stored on a bond mode.
///
/// # Errors
/// * `InvalidDuration` if `lock_secs` is zero
pub fn validate_mode_lock(lock_secs: u64) -> Result<(), PoolError> {
    if lock_secs == 0 {
        return Err(PoolError::InvalidDuration);
    }
    Ok(())
}

pub fn validate_discount_bps(discount_bps: u32) -> Result<(), PoolError> {
    if discount_bps > MAX_DISCOUNT_BPS {
        return Err(PoolError::InvalidDiscount);
    }
    Ok(())
}

pub fn validate_apr_bps(apr_bps: u32) -> Result<(), PoolError> {
    if apr_bps > MAX_APR_BPS {
        return Err(PoolError::InvalidRewardRate);
    }
    Ok(())
}

pub fn validate_positive(amount: i128) -> Result<(), PoolError> {
    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }
    Ok(())
}
