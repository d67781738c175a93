use soroban_sdk::{Address, Env, Symbol};

use crate::types::{BondMode, PoolConfig};

/// Emitted once when the pool is initialized.
///
/// # Topics
/// * `Symbol` - "pool_initialized"
///
/// # Data
/// * `PoolConfig` - The stored configuration
/// * `u32` - Initial APR in basis points
pub fn emit_pool_initialized(e: &Env, cfg: &PoolConfig, apr_bps: u32) {
    let topics = (Symbol::new(e, "pool_initialized"),);
    e.events().publish(topics, (cfg.clone(), apr_bps));
}

/// Emitted when an asset slot is (re)configured.
///
/// # Topics
/// * `Symbol` - "asset_set"
/// * `u32` - The asset slot
///
/// # Data
/// * `Address` - The accepted principal token
pub fn emit_asset_set(e: &Env, asset_id: u32, token: &Address) {
    let topics = (Symbol::new(e, "asset_set"), asset_id);
    e.events().publish(topics, token.clone());
}

/// Emitted when a bond mode is (re)configured.
///
/// # Topics
/// * `Symbol` - "mode_set"
/// * `u32` - The mode id
///
/// # Data
/// * `BondMode` - Discount and lock
pub fn emit_mode_set(e: &Env, mode_id: u32, mode: &BondMode) {
    let topics = (Symbol::new(e, "mode_set"), mode_id);
    e.events().publish(topics, *mode);
}

pub fn emit_reward_schedule_set(e: &Env, apr_bps: u32) {
    let topics = (Symbol::new(e, "reward_schedule_set"),);
    e.events().publish(topics, apr_bps);
}

/// Emitted when a position is opened by bonding a principal asset.
///
/// # Topics
/// * `Symbol` - "bond_opened"
/// * `Address` - The caller, who receives the receipt
///
/// # Data
/// * `u64` - Receipt id
/// * `i128` - Staking-equivalent value of the position
/// * `i128` - Principal pulled from the caller
/// * `u64` - Lock expiry
pub fn emit_bond_opened(
    e: &Env,
    owner: &Address,
    receipt_id: u64,
    value: i128,
    principal_paid: i128,
    end_time: u64,
) {
    let topics = (Symbol::new(e, "bond_opened"), owner.clone());
    let data = (receipt_id, value, principal_paid, end_time);
    e.events().publish(topics, data);
}

/// Emitted when a position is opened by depositing the staking asset.
///
/// # Topics
/// * `Symbol` - "deposit_opened"
/// * `Address` - The caller, who receives the receipt
///
/// # Data
/// * `u64` - Receipt id
/// * `i128` - Deposited amount
/// * `u64` - Lock expiry
pub fn emit_deposit_opened(e: &Env, owner: &Address, receipt_id: u64, amount: i128, end_time: u64) {
    let topics = (Symbol::new(e, "deposit_opened"), owner.clone());
    let data = (receipt_id, amount, end_time);
    e.events().publish(topics, data);
}

/// Emitted for every settled position, including zero-reward settlements.
///
/// # Topics
/// * `Symbol` - "reward_claimed"
/// * `Address` - The receipt holder
///
/// # Data
/// * `u64` - Receipt id
/// * `i128` - Reward owed for the settled interval
/// * `u64` - New `last_claim`
pub fn emit_reward_claimed(e: &Env, holder: &Address, receipt_id: u64, owed: i128, now: u64) {
    let topics = (Symbol::new(e, "reward_claimed"), holder.clone());
    let data = (receipt_id, owed, now);
    e.events().publish(topics, data);
}
