#![no_std]

//! # Bond Receipt Registry
//!
//! Issues one receipt per opened bonding-pool position and tracks which
//! address currently holds it. The holder of a receipt is the only address
//! allowed to claim rewards for the position bound to it.
//!
//! ## Features
//! - Minter-only issuance with dense, never-reused ids starting at 0
//! - Ownership lookup by id
//! - Per-owner enumeration in insertion order
//! - Plain holder-to-holder transfer
//!
//! ## Security
//! - Only the configured minter (the bonding pool) can issue receipts
//! - Only the current holder can transfer a receipt
//! - Emits events for audit trail

use bonding_errors::PoolError;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol, Vec};

/// Storage keys for the receipt registry
#[contracttype]
#[derive(Clone)]
enum DataKey {
    /// Admin address
    Admin,
    /// Address allowed to issue receipts
    Minter,
    /// Next receipt id to hand out
    NextId,
    /// Receipt id -> holder
    Owner(u64),
    /// Holder -> receipt ids in insertion order
    Holdings(Address),
}

fn read_admin(e: &Env) -> Result<Address, PoolError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(PoolError::NotInitialized)
}

fn read_holdings(e: &Env, owner: &Address) -> Vec<u64> {
    e.storage()
        .persistent()
        .get(&DataKey::Holdings(owner.clone()))
        .unwrap_or_else(|| Vec::new(e))
}

fn write_holdings(e: &Env, owner: &Address, holdings: &Vec<u64>) {
    e.storage()
        .persistent()
        .set(&DataKey::Holdings(owner.clone()), holdings);
}

#[contract]
pub struct BondReceipt;

#[contractimpl]
impl BondReceipt {
    /// Initialize the registry with an admin and the address allowed to mint.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - if called a second time
    pub fn initialize(e: Env, admin: Address, minter: Address) -> Result<(), PoolError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(PoolError::AlreadyInitialized);
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Minter, &minter);
        e.storage().instance().set(&DataKey::NextId, &0_u64);

        e.events().publish(
            (Symbol::new(&e, "receipt_initialized"),),
            (admin, minter),
        );
        Ok(())
    }

    /// Replace the minter. Admin only.
    pub fn set_minter(e: Env, admin: Address, minter: Address) -> Result<(), PoolError> {
        admin.require_auth();
        if read_admin(&e)? != admin {
            return Err(PoolError::Unauthorized);
        }
        e.storage().instance().set(&DataKey::Minter, &minter);
        e.events()
            .publish((Symbol::new(&e, "minter_set"),), minter);
        Ok(())
    }

    /// Issue a new receipt to `owner` and return its id.
    ///
    /// Requires the minter's authorization. When the minter is a contract
    /// calling directly, its invocation satisfies the check.
    ///
    /// # Events
    /// Emits `receipt_issued` with `(owner, id)`
    pub fn issue(e: Env, owner: Address) -> Result<u64, PoolError> {
        let minter: Address = e
            .storage()
            .instance()
            .get(&DataKey::Minter)
            .ok_or(PoolError::NotInitialized)?;
        minter.require_auth();

        let id: u64 = e.storage().instance().get(&DataKey::NextId).unwrap_or(0);
        let next = id.checked_add(1).ok_or(PoolError::Overflow)?;
        e.storage().instance().set(&DataKey::NextId, &next);

        e.storage().persistent().set(&DataKey::Owner(id), &owner);
        let mut holdings = read_holdings(&e, &owner);
        holdings.push_back(id);
        write_holdings(&e, &owner, &holdings);

        e.events()
            .publish((Symbol::new(&e, "receipt_issued"), owner), id);
        Ok(id)
    }

    /// Current holder of receipt `id`.
    ///
    /// # Errors
    /// * `ReceiptNotFound` - if `id` was never issued
    pub fn owner_of(e: Env, id: u64) -> Result<Address, PoolError> {
        e.storage()
            .persistent()
            .get(&DataKey::Owner(id))
            .ok_or(PoolError::ReceiptNotFound)
    }

    /// Receipts held by `owner`, oldest first.
    pub fn receipts_of(e: Env, owner: Address) -> Vec<u64> {
        read_holdings(&e, &owner)
    }

    /// Number of receipts held by `owner`.
    pub fn balance(e: Env, owner: Address) -> u32 {
        read_holdings(&e, &owner).len()
    }

    /// The `index`-th receipt held by `owner`.
    pub fn receipt_by_index(e: Env, owner: Address, index: u32) -> Result<u64, PoolError> {
        read_holdings(&e, &owner)
            .get(index)
            .ok_or(PoolError::ReceiptNotFound)
    }

    /// Total number of receipts ever issued.
    pub fn total_issued(e: Env) -> u64 {
        e.storage().instance().get(&DataKey::NextId).unwrap_or(0)
    }

    /// Move receipt `id` from `from` to `to`.
    ///
    /// # Errors
    /// * `ReceiptNotFound` - if `id` was never issued
    /// * `NotReceiptOwner` - if `from` does not hold `id`
    ///
    /// # Events
    /// Emits `receipt_transferred` with `(from, to, id)`
    pub fn transfer(e: Env, from: Address, to: Address, id: u64) -> Result<(), PoolError> {
        from.require_auth();

        let holder = Self::owner_of(e.clone(), id)?;
        if holder != from {
            return Err(PoolError::NotReceiptOwner);
        }

        let mut from_holdings = read_holdings(&e, &from);
        if let Some(index) = from_holdings.first_index_of(id) {
            from_holdings.remove(index);
        }
        write_holdings(&e, &from, &from_holdings);

        let mut to_holdings = read_holdings(&e, &to);
        to_holdings.push_back(id);
        write_holdings(&e, &to, &to_holdings);

        e.storage().persistent().set(&DataKey::Owner(id), &to);

        e.events()
            .publish((Symbol::new(&e, "receipt_transferred"),), (from, to, id));
        Ok(())
    }

    /// Get the admin address.
    pub fn get_admin(e: Env) -> Result<Address, PoolError> {
        read_admin(&e)
    }

    /// Get the minter address.
    pub fn get_minter(e: Env) -> Result<Address, PoolError> {
        e.storage()
            .instance()
            .get(&DataKey::Minter)
            .ok_or(PoolError::NotInitialized)
    }
}
