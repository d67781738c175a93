//! Tests for initialization and the admin-managed mode table.

#![cfg(test)]

use crate::test_helpers::*;
use crate::{BondMode, BondingFarmPool, BondingFarmPoolClient, PoolConfig, PoolError, RewardSchedule};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

fn fresh_config(e: &Env) -> PoolConfig {
    PoolConfig {
        admin: Address::generate(e),
        receipt: Address::generate(e),
        staking_token: Address::generate(e),
        reward_token: Address::generate(e),
        oracle: Address::generate(e),
        price_scale: 1,
    }
}

// ═══════════════════════════════════════════════════════════════════
// 1. Initialization
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_initialize_stores_config() {
    let e = Env::default();
    let pool = setup(&e);

    let cfg = pool.client.get_config();
    assert_eq!(cfg.admin, pool.admin);
    assert_eq!(cfg.receipt, pool.receipt.address);
    assert_eq!(cfg.staking_token, pool.staking.address);
    assert_eq!(cfg.reward_token, pool.reward.address);
    assert_eq!(cfg.price_scale, 1);
    assert_eq!(
        pool.client.get_reward_schedule(),
        RewardSchedule { apr_bps: APR_BPS }
    );
    assert_eq!(pool.client.get_reward_stats().total_paid, 0);
}

#[test]
fn test_initialize_twice_fails() {
    let e = Env::default();
    let pool = setup(&e);

    let cfg = pool.client.get_config();
    assert_eq!(
        pool.client.try_initialize(&cfg, &APR_BPS),
        Err(Ok(PoolError::AlreadyInitialized))
    );
}

#[test]
fn test_initialize_rejects_non_positive_price_scale() {
    let e = Env::default();
    let contract_id = e.register(BondingFarmPool, ());
    let client = BondingFarmPoolClient::new(&e, &contract_id);

    let mut cfg = fresh_config(&e);
    cfg.price_scale = 0;
    assert_eq!(
        client.try_initialize(&cfg, &APR_BPS),
        Err(Ok(PoolError::InvalidPriceScale))
    );
    cfg.price_scale = -1;
    assert_eq!(
        client.try_initialize(&cfg, &APR_BPS),
        Err(Ok(PoolError::InvalidPriceScale))
    );
}

#[test]
fn test_initialize_rejects_excessive_apr() {
    let e = Env::default();
    let contract_id = e.register(BondingFarmPool, ());
    let client = BondingFarmPoolClient::new(&e, &contract_id);

    assert_eq!(
        client.try_initialize(&fresh_config(&e), &50_001),
        Err(Ok(PoolError::InvalidRewardRate))
    );
    // A rejected call leaves the pool uninitialized.
    assert_eq!(client.try_get_config(), Err(Ok(PoolError::NotInitialized)));
}

// ═══════════════════════════════════════════════════════════════════
// 2. Asset slots
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_set_and_get_asset() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(pool.client.get_asset(&0), Some(pool.principal.address.clone()));
    assert_eq!(pool.client.get_asset(&1), None);

    let other = Address::generate(&e);
    pool.client.set_asset(&pool.admin, &0, &other);
    assert_eq!(pool.client.get_asset(&0), Some(other));
}

#[test]
fn test_set_asset_non_admin_rejected() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.try_set_asset(&pool.john, &1, &pool.principal.address),
        Err(Ok(PoolError::Unauthorized))
    );
    assert_eq!(pool.client.get_asset(&1), None);
}

#[test]
fn test_second_asset_slot_is_bondable() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client.set_asset(&pool.admin, &3, &pool.principal.address);
    let (value, required) = pool.client.quote_bond(&3, &(10 * UNIT), &0);
    assert_eq!(value, 10 * UNIT);
    assert_eq!(required, 700 * UNIT);
}

// ═══════════════════════════════════════════════════════════════════
// 3. Bond modes
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_set_and_get_mode() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.get_mode(&0),
        Some(BondMode {
            discount_bps: DISCOUNT_BPS,
            lock_secs: ONE_YEAR
        })
    );
    assert_eq!(pool.client.get_mode(&9), None);
}

#[test]
fn test_mode_discount_change_reprices_quote() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client.set_mode(
        &pool.admin,
        &0,
        &BondMode {
            discount_bps: 5_000,
            lock_secs: ONE_YEAR,
        },
    );

    let (_, required) = pool.client.quote_bond(&0, &(10 * UNIT), &0);
    assert_eq!(required, 500 * UNIT);
}

#[test]
fn test_full_discount_makes_bond_free() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client.set_mode(
        &pool.admin,
        &1,
        &BondMode {
            discount_bps: 10_000,
            lock_secs: ONE_DAY,
        },
    );

    let (_, required) = pool.client.quote_bond(&0, &(10 * UNIT), &1);
    assert_eq!(required, 0);
}

#[test]
fn test_mode_discount_above_100_percent_rejected() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.try_set_mode(
            &pool.admin,
            &1,
            &BondMode {
                discount_bps: 10_001,
                lock_secs: ONE_YEAR,
            }
        ),
        Err(Ok(PoolError::InvalidDiscount))
    );
    assert_eq!(pool.client.get_mode(&1), None);
}

#[test]
fn test_mode_zero_lock_rejected() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.try_set_mode(
            &pool.admin,
            &1,
            &BondMode {
                discount_bps: DISCOUNT_BPS,
                lock_secs: 0,
            }
        ),
        Err(Ok(PoolError::InvalidDuration))
    );
    assert_eq!(pool.client.get_mode(&1), None);
}

#[test]
fn test_mode_accepts_short_and_multi_year_locks() {
    let e = Env::default();
    let pool = setup(&e);

    for lock_secs in [1_u64, 3_600, ONE_YEAR + 1, 2 * ONE_YEAR] {
        let mode = BondMode {
            discount_bps: 0,
            lock_secs,
        };
        pool.client.set_mode(&pool.admin, &1, &mode);
        assert_eq!(pool.client.get_mode(&1), Some(mode));
    }

    // Mode 1 now locks for two years.
    let (_, required) = pool.client.quote_bond(&0, &UNIT, &1);
    approve(&e, &pool.principal, &pool.john, &pool.pool_id, required);
    let id = pool.client.bond(&pool.john, &0, &UNIT, &1);
    assert_eq!(pool.client.get_position(&id).end_time, START + 2 * ONE_YEAR);
}

#[test]
fn test_mode_lock_sets_position_end_time() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client.set_mode(
        &pool.admin,
        &2,
        &BondMode {
            discount_bps: 0,
            lock_secs: 7 * ONE_DAY,
        },
    );

    let (_, required) = pool.client.quote_bond(&0, &UNIT, &2);
    assert_eq!(required, 100 * UNIT);
    approve(&e, &pool.principal, &pool.john, &pool.pool_id, required);
    let id = pool.client.bond(&pool.john, &0, &UNIT, &2);

    assert_eq!(pool.client.get_position(&id).end_time, START + 7 * ONE_DAY);
}

#[test]
fn test_set_mode_non_admin_rejected() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.try_set_mode(
            &pool.bob,
            &1,
            &BondMode {
                discount_bps: 0,
                lock_secs: ONE_DAY,
            }
        ),
        Err(Ok(PoolError::Unauthorized))
    );
}

// ═══════════════════════════════════════════════════════════════════
// 4. Reward schedule
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_set_reward_schedule_non_admin_rejected() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.try_set_reward_schedule(&pool.alice, &2_000),
        Err(Ok(PoolError::Unauthorized))
    );
    assert_eq!(pool.client.get_reward_schedule().apr_bps, APR_BPS);
}

#[test]
fn test_set_reward_schedule_bounds() {
    let e = Env::default();
    let pool = setup(&e);

    assert_eq!(
        pool.client.try_set_reward_schedule(&pool.admin, &50_001),
        Err(Ok(PoolError::InvalidRewardRate))
    );
    pool.client.set_reward_schedule(&pool.admin, &0);
    assert_eq!(pool.client.get_reward_schedule().apr_bps, 0);
}

#[test]
fn test_reward_rate_change_applies_to_unsettled_time() {
    let e = Env::default();
    let pool = setup(&e);

    let id = deposit_as(&e, &pool, &pool.bob, 10 * UNIT, ONE_YEAR);
    advance(&e, 10 * ONE_DAY);
    pool.client.set_reward_schedule(&pool.admin, &(2 * APR_BPS));

    assert_eq!(
        pool.client.claim(&pool.bob, &id),
        expected_reward(10 * UNIT, 2 * APR_BPS, 10 * ONE_DAY)
    );
}

#[test]
fn test_zero_apr_pays_nothing() {
    let e = Env::default();
    let pool = setup(&e);

    pool.client.set_reward_schedule(&pool.admin, &0);
    let id = deposit_as(&e, &pool, &pool.bob, 10 * UNIT, ONE_YEAR);
    advance(&e, 100 * ONE_DAY);

    assert_eq!(pool.client.claim(&pool.bob, &id), 0);
    assert_eq!(pool.reward.balance(&pool.bob), 0);
}
