//! Client interfaces for the pool's external collaborators.
//!
//! The pool never links the registry or the oracle; it only needs their call
//! surface, so each one is declared as a trait and reached through the
//! generated client.

use soroban_sdk::{contractclient, Address, Env, Vec};

/// Pure price source. A non-positive answer means "no price".
#[contractclient(name = "OracleClient")]
pub trait PriceOracle {
    fn price(env: Env, asset: Address) -> i128;
}

/// Receipt registry: the single source of truth for who may claim a position.
#[contractclient(name = "ReceiptClient")]
pub trait ReceiptRegistry {
    fn issue(env: Env, owner: Address) -> u64;
    fn owner_of(env: Env, id: u64) -> Address;
    fn receipts_of(env: Env, owner: Address) -> Vec<u64>;
}
