#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, BytesN, Env};

/// Fired when a user registers a bundle of encrypted inputs.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputsRegisteredEvent {
    pub contract: Address,
    pub user: Address,
    pub count: u32,
    pub proof: BytesN<32>,
    pub timestamp: u64,
}

/// Fired when an account is added to a handle's access list by `allow`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub handle: BytesN<32>,
    pub granted_by: Address,
    pub account: Address,
    pub timestamp: u64,
}

/// Fired when a handle is released for public decryption.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicDecryptionEvent {
    pub handle: BytesN<32>,
    pub granted_by: Address,
    pub timestamp: u64,
}

pub fn publish_inputs_registered(
    env: &Env,
    contract: Address,
    user: Address,
    count: u32,
    proof: BytesN<32>,
) {
    env.events().publish(
        (symbol_short!("INPUTS"), user.clone()),
        InputsRegisteredEvent {
            contract,
            user,
            count,
            proof,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_access_granted(env: &Env, handle: BytesN<32>, granted_by: Address, account: Address) {
    env.events().publish(
        (symbol_short!("ALLOW"), account.clone()),
        AccessGrantedEvent {
            handle,
            granted_by,
            account,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_public_decryption(env: &Env, handle: BytesN<32>, granted_by: Address) {
    env.events().publish(
        (symbol_short!("PUBLIC"), granted_by.clone()),
        PublicDecryptionEvent {
            handle,
            granted_by,
            timestamp: env.ledger().timestamp(),
        },
    );
}
