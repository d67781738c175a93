//! Mode table: principal asset slots and discount/lock schedules.
//!
//! An asset slot and a bond mode are configured independently by the admin.
//! A bond needs both; `resolve_terms` is the only way to obtain a priced
//! pairing, so a half-configured mode can never open a position.

use bonding_errors::PoolError;
use soroban_sdk::{Address, Env};

use crate::types::{BondMode, BondTerms, DataKey};
use crate::validation::{validate_discount_bps, validate_mode_lock};

pub fn asset(e: &Env, asset_id: u32) -> Option<Address> {
    e.storage().instance().get(&DataKey::Asset(asset_id))
}

pub fn mode(e: &Env, mode_id: u32) -> Option<BondMode> {
    e.storage().instance().get(&DataKey::Mode(mode_id))
}

/// Overwrites any previous token under `asset_id`.
pub fn set_asset(e: &Env, asset_id: u32, token: &Address) {
    e.storage().instance().set(&DataKey::Asset(asset_id), token);
}

/// Overwrites any previous schedule under `mode_id`.
pub fn set_mode(e: &Env, mode_id: u32, mode: &BondMode) -> Result<(), PoolError> {
    validate_discount_bps(mode.discount_bps)?;
    validate_mode_lock(mode.lock_secs)?;
    e.storage().instance().set(&DataKey::Mode(mode_id), mode);
    Ok(())
}

/// Resolve a bondable pairing.
///
/// # Errors
/// * `InvalidMode` - no schedule under `mode_id`
/// * `InvalidAssetMode` - no principal asset under `asset_id`
pub fn resolve_terms(e: &Env, asset_id: u32, mode_id: u32) -> Result<BondTerms, PoolError> {
    let schedule = mode(e, mode_id).ok_or(PoolError::InvalidMode)?;
    let asset = asset(e, asset_id).ok_or(PoolError::InvalidAssetMode)?;
    Ok(BondTerms {
        asset_id,
        asset,
        mode_id,
        discount_bps: schedule.discount_bps,
        lock_secs: schedule.lock_secs,
    })
}
