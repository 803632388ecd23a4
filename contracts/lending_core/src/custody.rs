//! Reserve-asset custody adapter.
//!
//! Single capability: move an amount of a named reserve asset between the
//! contract and a target address. The designated native-asset contract
//! (set at initialization) selects the inbound variant: the native asset is
//! pulled with a direct authorized transfer of exactly the requested
//! amount, while any other reserve asset is pulled through an
//! allowance-based `transfer_from` with this contract as spender. Outbound
//! transfers push directly in both variants.
//!
//! Token-contract failures abort the invocation, so a partial transfer can
//! never be observed. Callers must finish all ledger writes before calling
//! into this module.

use soroban_sdk::{token, Address, Env};

use crate::types::DataKey;

fn is_native(e: &Env, asset: &Address) -> bool {
    e.storage()
        .instance()
        .get::<_, Address>(&DataKey::NativeToken)
        .map_or(false, |native| native == *asset)
}

/// Pull `amount` of `asset` from `from` into contract custody.
pub fn pull(e: &Env, asset: &Address, from: &Address, amount: i128) {
    let client = token::Client::new(e, asset);
    let contract = e.current_contract_address();
    if is_native(e, asset) {
        client.transfer(from, &contract, &amount);
    } else {
        client.transfer_from(&contract, from, &contract, &amount);
    }
}

/// Push `amount` of `asset` from contract custody to `to`.
pub fn push(e: &Env, asset: &Address, to: &Address, amount: i128) {
    let client = token::Client::new(e, asset);
    client.transfer(&e.current_contract_address(), to, &amount);
}
