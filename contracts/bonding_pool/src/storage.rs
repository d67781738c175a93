use bonding_errors::PoolError;
use soroban_sdk::{Address, Env};

use crate::types::{DataKey, PoolConfig, Position, Reserves, RewardSchedule, RewardStats};

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn config(e: &Env) -> Result<PoolConfig, PoolError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_config(e: &Env, cfg: &PoolConfig) {
    e.storage().instance().set(&DataKey::Config, cfg);
}

/// Require `caller`'s signature and that it is the configured admin.
pub fn require_admin(e: &Env, caller: &Address) -> Result<PoolConfig, PoolError> {
    caller.require_auth();
    let cfg = config(e)?;
    if cfg.admin != *caller {
        return Err(PoolError::Unauthorized);
    }
    Ok(cfg)
}

pub fn reward_schedule(e: &Env) -> RewardSchedule {
    e.storage()
        .instance()
        .get(&DataKey::RewardSchedule)
        .unwrap_or(RewardSchedule { apr_bps: 0 })
}

pub fn set_reward_schedule(e: &Env, schedule: &RewardSchedule) {
    e.storage()
        .instance()
        .set(&DataKey::RewardSchedule, schedule);
}

pub fn reserves(e: &Env) -> Reserves {
    e.storage()
        .instance()
        .get(&DataKey::Reserves)
        .unwrap_or_default()
}

pub fn set_reserves(e: &Env, reserves: &Reserves) {
    e.storage().instance().set(&DataKey::Reserves, reserves);
}

pub fn reward_stats(e: &Env) -> RewardStats {
    e.storage()
        .instance()
        .get(&DataKey::RewardStats)
        .unwrap_or_default()
}

pub fn set_reward_stats(e: &Env, stats: &RewardStats) {
    e.storage().instance().set(&DataKey::RewardStats, stats);
}

pub fn position(e: &Env, receipt_id: u64) -> Result<Position, PoolError> {
    e.storage()
        .persistent()
        .get(&DataKey::Position(receipt_id))
        .ok_or(PoolError::PositionNotFound)
}

pub fn set_position(e: &Env, receipt_id: u64, position: &Position) {
    e.storage()
        .persistent()
        .set(&DataKey::Position(receipt_id), position);
}
