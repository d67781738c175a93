//! Bond pricing.
//!
//! `quote_bond` and `bond` both go through `quote`, so a quote is exactly what
//! the execution path charges for the same oracle price and mode.

use bonding_errors::PoolError;
use soroban_sdk::Env;

use crate::interfaces::OracleClient;
use crate::math::{add_i128, apply_discount, div_i128, mul_i128};
use crate::modes::resolve_terms;
use crate::storage;
use crate::token_integration::pool_balance;
use crate::types::{BondTerms, PoolConfig};
use crate::validation::{validate_positive, MAX_DISCOUNT_BPS};

/// A priced bond request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondQuote {
    pub terms: BondTerms,
    /// Staking-equivalent value the position will carry.
    pub value: i128,
    /// Principal the caller must supply.
    pub required_principal: i128,
}

/// `price * value * (10_000 - discount_bps) / 10_000 / price_scale`, floored.
pub fn required_principal(
    price: i128,
    value: i128,
    discount_bps: u32,
    price_scale: i128,
) -> Result<i128, PoolError> {
    let gross = mul_i128(price, value)?;
    let discounted = apply_discount(gross, discount_bps)?;
    div_i128(discounted, price_scale)
}

/// Current staking-token price. Queried once per quote.
pub fn oracle_price(e: &Env, cfg: &PoolConfig) -> Result<i128, PoolError> {
    match OracleClient::new(e, &cfg.oracle).try_price(&cfg.staking_token) {
        Ok(Ok(price)) if price > 0 => Ok(price),
        _ => Err(PoolError::OracleUnavailable),
    }
}

/// The pool must keep enough staking asset to honor every open position
/// plus the one being quoted.
pub fn require_capacity(e: &Env, cfg: &PoolConfig, value: i128) -> Result<(), PoolError> {
    let reserves = storage::reserves(e);
    let committed = add_i128(reserves.bonded, reserves.deposited)?;
    let needed = add_i128(committed, value)?;
    if needed > pool_balance(e, &cfg.staking_token) {
        return Err(PoolError::CapacityExceeded);
    }
    Ok(())
}

/// Validate and price a bond of `value` staking-equivalent units.
pub fn quote(
    e: &Env,
    cfg: &PoolConfig,
    asset_id: u32,
    value: i128,
    mode_id: u32,
) -> Result<BondQuote, PoolError> {
    validate_positive(value)?;
    let terms = resolve_terms(e, asset_id, mode_id)?;
    require_capacity(e, cfg, value)?;
    let price = oracle_price(e, cfg)?;
    let required_principal =
        required_principal(price, value, terms.discount_bps, cfg.price_scale)?;
    // Only a full discount may bond for nothing.
    if required_principal == 0 && terms.discount_bps < MAX_DISCOUNT_BPS {
        return Err(PoolError::InvalidAmount);
    }
    Ok(BondQuote {
        terms,
        value,
        required_principal,
    })
}
