//! Overflow-safe arithmetic helpers for pricing and reward accrual.
//!
//! All functions use checked arithmetic and surface overflow, underflow and
//! division by zero as `PoolError::Overflow`.

use bonding_errors::PoolError;

/// Basis-point denominator (100% = 10_000 bps).
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Checked `u64` addition.
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, PoolError> {
    a.checked_add(b).ok_or(PoolError::Overflow)
}

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, PoolError> {
    a.checked_add(b).ok_or(PoolError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, PoolError> {
    a.checked_sub(b).ok_or(PoolError::Overflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, PoolError> {
    a.checked_mul(b).ok_or(PoolError::Overflow)
}

/// Checked `i128` division (floor for non-negative operands).
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, PoolError> {
    a.checked_div(b).ok_or(PoolError::Overflow)
}

/// `amount * (10_000 - discount_bps) / 10_000`.
///
/// Callers validate `discount_bps <= 10_000` before storing a mode.
#[inline]
pub fn apply_discount(amount: i128, discount_bps: u32) -> Result<i128, PoolError> {
    let keep = sub_i128(BPS_DENOMINATOR, discount_bps as i128)?;
    div_i128(mul_i128(amount, keep)?, BPS_DENOMINATOR)
}
