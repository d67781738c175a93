//! Token integration helpers for the bonding pool.
//! Centralizes balance/allowance checks and transfer operations for the
//! principal, staking and reward assets.

use bonding_errors::PoolError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

/// Pool's own balance of `token`.
pub fn pool_balance(e: &Env, token: &Address) -> i128 {
    TokenClient::new(e, token).balance(&e.current_contract_address())
}

/// @notice Checks that `owner` holds and has approved at least `amount`.
/// @dev Uses token allowance(owner, spender) where spender is the pool.
pub fn require_funds(e: &Env, token: &Address, owner: &Address, amount: i128) -> Result<(), PoolError> {
    let client = TokenClient::new(e, token);
    let contract = e.current_contract_address();
    if client.balance(owner) < amount || client.allowance(owner, &contract) < amount {
        return Err(PoolError::InsufficientFunds);
    }
    Ok(())
}

/// @notice Pulls `amount` of `token` from `owner` into the pool.
/// @dev Requires prior approval for the pool as spender.
pub fn transfer_into_pool(e: &Env, token: &Address, owner: &Address, amount: i128) -> Result<(), PoolError> {
    if amount == 0 {
        return Ok(());
    }
    require_funds(e, token, owner, amount)?;
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer_from(&contract, owner, &contract, &amount);
    Ok(())
}

/// @notice Pushes `amount` of `token` from the pool to `recipient`.
pub fn transfer_from_pool(e: &Env, token: &Address, recipient: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let contract = e.current_contract_address();
    TokenClient::new(e, token).transfer(&contract, recipient, &amount);
}
