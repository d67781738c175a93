//! Bonding Farm Pool Contract
//!
//! Opens time-locked positions in a staking asset, either by bonding a
//! principal asset at an oracle price minus a per-mode discount, or by
//! depositing the staking asset directly. Each position is bound to a receipt
//! from an external registry; whoever currently holds the receipt may claim
//! the reward that accrues linearly while the position is open.
//!
//! ## Key design decisions
//!
//! - **One quote path**: `quote_bond` and `bond` share `pricing::quote`.
//! - **Capacity**: bonded and deposited value together never exceed the pool's
//!   staking balance.
//! - **Registry owns ownership**: claims ask the registry for the current
//!   holder instead of trusting `Position.owner`.
//! - **Checks-Effects-Interactions**: `last_claim` is stored before rewards
//!   are transferred.
//! - **Single clock read**: each entry point reads the ledger timestamp once.

#![no_std]

mod events;
mod interfaces;
mod math;
mod modes;
mod pricing;
mod rewards;
mod storage;
mod token_integration;
mod validation;

pub mod types;

pub use bonding_errors::{ErrorCategory, ErrorExt, PoolError};
pub use interfaces::{OracleClient, PriceOracle, ReceiptClient, ReceiptRegistry};
pub use rewards::{Accrual, SECONDS_PER_YEAR};
pub use types::{
    BondMode, BondOrigin, PoolConfig, Position, PositionKind, Reserves, RewardSchedule,
    RewardStats,
};
pub use validation::{MAX_APR_BPS, MIN_LOCK_SECS};

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use crate::math::add_i128;


#[cfg(test)]
mod test_modes;

// ─── Helpers ───────────────────────────────────────────────────────────────

/// Open a position, bind it to a fresh receipt and return the receipt id.
fn open_position(
    e: &Env,
    cfg: &PoolConfig,
    owner: &Address,
    amount: i128,
    now: u64,
    lock_secs: u64,
    kind: PositionKind,
) -> Result<(u64, Position), PoolError> {
    let end_time = math::add_u64(now, lock_secs)?;
    let receipt_id = ReceiptClient::new(e, &cfg.receipt).issue(owner);
    let position = Position {
        owner: owner.clone(),
        amount,
        start_time: now,
        end_time,
        last_claim: now,
        kind,
    };
    storage::set_position(e, receipt_id, &position);
    Ok((receipt_id, position))
}

/// Settle one position for `holder` at `now` and return the reward owed.
/// Does not transfer anything.
fn settle(
    e: &Env,
    cfg: &PoolConfig,
    holder: &Address,
    receipt_id: u64,
    now: u64,
) -> Result<i128, PoolError> {
    let mut position = storage::position(e, receipt_id)?;

    let current_holder = ReceiptClient::new(e, &cfg.receipt).owner_of(&receipt_id);
    if current_holder != *holder {
        log!(e, "claim rejected: receipt {} not held by caller", receipt_id);
        return Err(PoolError::Unauthorized);
    }

    let elapsed = now.saturating_sub(position.last_claim);
    let owed = storage::reward_schedule(e).accrued(position.amount, elapsed)?;

    if now > position.last_claim {
        position.last_claim = now;
    }
    storage::set_position(e, receipt_id, &position);

    events::emit_reward_claimed(e, holder, receipt_id, owed, position.last_claim);
    Ok(owed)
}

/// Pay `owed` reward to `recipient` and record it.
fn pay_reward(e: &Env, cfg: &PoolConfig, recipient: &Address, owed: i128) -> Result<(), PoolError> {
    if owed == 0 {
        return Ok(());
    }
    if token_integration::pool_balance(e, &cfg.reward_token) < owed {
        return Err(PoolError::InsufficientRewards);
    }

    let mut stats = storage::reward_stats(e);
    stats.total_paid = add_i128(stats.total_paid, owed)?;
    storage::set_reward_stats(e, &stats);

    token_integration::transfer_from_pool(e, &cfg.reward_token, recipient, owed);
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct BondingFarmPool;

#[contractimpl]
impl BondingFarmPool {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. Stores the collaborators and the initial
    /// reward rate.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - on a second call
    /// * `InvalidPriceScale` - `price_scale <= 0`
    /// * `InvalidRewardRate` - `apr_bps > MAX_APR_BPS`
    pub fn initialize(e: Env, config: PoolConfig, apr_bps: u32) -> Result<(), PoolError> {
        if storage::is_initialized(&e) {
            return Err(PoolError::AlreadyInitialized);
        }
        if config.price_scale <= 0 {
            return Err(PoolError::InvalidPriceScale);
        }
        validation::validate_apr_bps(apr_bps)?;

        storage::set_config(&e, &config);
        storage::set_reward_schedule(&e, &RewardSchedule { apr_bps });
        storage::set_reserves(&e, &Reserves::default());
        storage::set_reward_stats(&e, &RewardStats::default());

        events::emit_pool_initialized(&e, &config, apr_bps);
        Ok(())
    }

    /// Configure the principal asset accepted under `asset_id`. Admin only.
    /// Overwrites any previous value.
    pub fn set_asset(e: Env, admin: Address, asset_id: u32, token: Address) -> Result<(), PoolError> {
        storage::require_admin(&e, &admin)?;
        modes::set_asset(&e, asset_id, &token);
        events::emit_asset_set(&e, asset_id, &token);
        Ok(())
    }

    /// Configure discount and lock for `mode_id`. Admin only.
    ///
    /// # Errors
    /// * `InvalidDiscount` - `discount_bps > 10_000`
    /// * `InvalidDuration` - `lock_secs == 0`
    pub fn set_mode(e: Env, admin: Address, mode_id: u32, mode: BondMode) -> Result<(), PoolError> {
        storage::require_admin(&e, &admin)?;
        modes::set_mode(&e, mode_id, &mode)?;
        events::emit_mode_set(&e, mode_id, &mode);
        Ok(())
    }

    /// Change the reward rate. Applies to every interval settled afterwards,
    /// including time accrued before the change.
    pub fn set_reward_schedule(e: Env, admin: Address, apr_bps: u32) -> Result<(), PoolError> {
        storage::require_admin(&e, &admin)?;
        validation::validate_apr_bps(apr_bps)?;
        storage::set_reward_schedule(&e, &RewardSchedule { apr_bps });
        events::emit_reward_schedule_set(&e, apr_bps);
        Ok(())
    }

    // ── Pricing ────────────────────────────────────────────────────────────

    /// Price a bond of `value` staking-equivalent units using the principal
    /// asset in slot `asset_id` and the schedule in `mode_id`.
    ///
    /// Returns `(value, required_principal)`.
    ///
    /// # Errors
    /// * `InvalidAmount` - `value <= 0`, or the price floors to zero
    ///   principal under a partial discount
    /// * `InvalidMode` - `mode_id` not configured
    /// * `InvalidAssetMode` - `asset_id` not configured
    /// * `CapacityExceeded` - the pool cannot back `value`
    /// * `OracleUnavailable` - no positive staking-token price
    pub fn quote_bond(e: Env, asset_id: u32, value: i128, mode_id: u32) -> Result<(i128, i128), PoolError> {
        let cfg = storage::config(&e)?;
        let quote = pricing::quote(&e, &cfg, asset_id, value, mode_id)?;
        Ok((quote.value, quote.required_principal))
    }

    // ── Position lifecycle ─────────────────────────────────────────────────

    /// Bond principal for a position worth `value` staking units.
    ///
    /// Pulls the quoted principal from `caller` (prior approval required),
    /// opens a position locked for the mode's duration, and issues a receipt
    /// to `caller`. The pool's staking balance is unchanged.
    ///
    /// Returns the receipt id.
    ///
    /// # Errors
    /// All of `quote_bond`, plus `InsufficientFunds` when the caller's
    /// principal balance or allowance is below the quote.
    pub fn bond(e: Env, caller: Address, asset_id: u32, value: i128, mode_id: u32) -> Result<u64, PoolError> {
        caller.require_auth();
        let cfg = storage::config(&e)?;
        let now = e.ledger().timestamp();

        let quote = pricing::quote(&e, &cfg, asset_id, value, mode_id)?;
        token_integration::transfer_into_pool(&e, &quote.terms.asset, &caller, quote.required_principal)?;

        let mut reserves = storage::reserves(&e);
        reserves.bonded = add_i128(reserves.bonded, value)?;
        storage::set_reserves(&e, &reserves);

        let kind = PositionKind::Bonded(BondOrigin {
            asset_id: quote.terms.asset_id,
            mode_id: quote.terms.mode_id,
        });
        let (receipt_id, position) =
            open_position(&e, &cfg, &caller, value, now, quote.terms.lock_secs, kind)?;

        events::emit_bond_opened(
            &e,
            &caller,
            receipt_id,
            value,
            quote.required_principal,
            position.end_time,
        );
        Ok(receipt_id)
    }

    /// Lock `amount` of the staking asset for `lock_secs` seconds.
    ///
    /// Returns the receipt id.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount <= 0`
    /// * `InvalidDuration` - `lock_secs < MIN_LOCK_SECS`
    /// * `InsufficientFunds` - balance or allowance below `amount`
    pub fn deposit(e: Env, caller: Address, amount: i128, lock_secs: u64) -> Result<u64, PoolError> {
        caller.require_auth();
        let cfg = storage::config(&e)?;
        let now = e.ledger().timestamp();

        validation::validate_positive(amount)?;
        validation::validate_deposit_lock(lock_secs)?;

        token_integration::transfer_into_pool(&e, &cfg.staking_token, &caller, amount)?;

        let mut reserves = storage::reserves(&e);
        reserves.deposited = add_i128(reserves.deposited, amount)?;
        storage::set_reserves(&e, &reserves);

        let (receipt_id, position) = open_position(
            &e,
            &cfg,
            &caller,
            amount,
            now,
            lock_secs,
            PositionKind::Deposited,
        )?;

        events::emit_deposit_opened(&e, &caller, receipt_id, amount, position.end_time);
        Ok(receipt_id)
    }

    /// Settle and pay the reward accrued on `receipt_id` since its last claim.
    ///
    /// Succeeds with zero when no time has elapsed.
    ///
    /// # Errors
    /// * `PositionNotFound` - no position bound to `receipt_id`
    /// * `Unauthorized` - `caller` is not the receipt's current holder
    /// * `InsufficientRewards` - the pool cannot cover the reward
    pub fn claim(e: Env, caller: Address, receipt_id: u64) -> Result<i128, PoolError> {
        caller.require_auth();
        let cfg = storage::config(&e)?;
        let now = e.ledger().timestamp();

        let owed = settle(&e, &cfg, &caller, receipt_id, now)?;
        pay_reward(&e, &cfg, &caller, owed)?;
        Ok(owed)
    }

    /// Settle every receipt `caller` holds and pay the sum in one transfer.
    ///
    /// Receipts without a bound position are skipped.
    pub fn claim_all(e: Env, caller: Address) -> Result<i128, PoolError> {
        caller.require_auth();
        let cfg = storage::config(&e)?;
        let now = e.ledger().timestamp();

        let receipts = ReceiptClient::new(&e, &cfg.receipt).receipts_of(&caller);
        let mut total: i128 = 0;
        for receipt_id in receipts.iter() {
            match settle(&e, &cfg, &caller, receipt_id, now) {
                Ok(owed) => total = add_i128(total, owed)?,
                Err(PoolError::PositionNotFound) => continue,
                Err(err) => return Err(err),
            }
        }

        pay_reward(&e, &cfg, &caller, total)?;
        Ok(total)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Position bound to `receipt_id`.
    pub fn get_position(e: Env, receipt_id: u64) -> Result<Position, PoolError> {
        storage::position(&e, receipt_id)
    }

    /// Receipt ids currently held by `owner`, as reported by the registry.
    pub fn positions_of(e: Env, owner: Address) -> Result<Vec<u64>, PoolError> {
        let cfg = storage::config(&e)?;
        Ok(ReceiptClient::new(&e, &cfg.receipt).receipts_of(&owner))
    }

    /// Reward `claim` would pay for `receipt_id` right now.
    pub fn pending_reward(e: Env, receipt_id: u64) -> Result<i128, PoolError> {
        let position = storage::position(&e, receipt_id)?;
        let elapsed = e.ledger().timestamp().saturating_sub(position.last_claim);
        storage::reward_schedule(&e).accrued(position.amount, elapsed)
    }

    pub fn get_asset(e: Env, asset_id: u32) -> Option<Address> {
        modes::asset(&e, asset_id)
    }

    pub fn get_mode(e: Env, mode_id: u32) -> Option<BondMode> {
        modes::mode(&e, mode_id)
    }

    pub fn get_config(e: Env) -> Result<PoolConfig, PoolError> {
        storage::config(&e)
    }

    pub fn get_reward_schedule(e: Env) -> RewardSchedule {
        storage::reward_schedule(&e)
    }

    pub fn get_reserves(e: Env) -> Reserves {
        storage::reserves(&e)
    }

    pub fn get_reward_stats(e: Env) -> RewardStats {
        storage::reward_stats(&e)
    }
}
