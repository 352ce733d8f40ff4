//! Ciphertext store and handle issuance.
//!
//! Handles are SHA-256 digests of a strictly increasing counter, so two
//! encryptions of the same clear value never share a handle. Everything the
//! runtime knows about a handle lives in a single persistent record, so an
//! operation touches one ledger entry per operand and one per result.

use common::{ttl, FheType, RuntimeError};
use soroban_sdk::{contracttype, vec, Address, Bytes, BytesN, Env, Vec};

use crate::ops::Operand;

// ── Storage keys ─────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    HandleNonce,
    Ciphertext(BytesN<32>),
}

const HANDLE_DOMAIN: &[u8] = b"fhe-runtime/handle/v1";

// ── Records ──────────────────────────────────────────────────────────────────

/// Who an externally encrypted input was issued for, and what its proof attests.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputBinding {
    pub contract: Address,
    pub user: Address,
    pub proof: BytesN<32>,
    pub bound: u32,
}

/// A ciphertext together with its access state.
///
/// The runtime evaluates homomorphic operations host-side, so the body is the
/// clear value reduced to the type width.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ciphertext {
    pub fhe_type: FheType,
    pub value: u64,
    /// Accounts that may compute on or user-decrypt the value.
    pub acl: Vec<Address>,
    pub public: bool,
    /// Set only on inputs registered through `encrypt_inputs`.
    pub binding: Option<InputBinding>,
}

impl Ciphertext {
    pub fn operand(&self) -> Operand {
        Operand {
            fhe_type: self.fhe_type,
            value: self.value,
        }
    }
}

// ── Handles ──────────────────────────────────────────────────────────────────

pub fn handle_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::HandleNonce)
        .unwrap_or(0u64)
}

pub fn next_handle(env: &Env) -> BytesN<32> {
    let nonce = handle_count(env);
    // u64 handle space is never exhausted in practice
    env.storage()
        .instance()
        .set(&DataKey::HandleNonce, &nonce.wrapping_add(1));
    ttl::extend_instance(env);

    let mut preimage = Bytes::from_slice(env, HANDLE_DOMAIN);
    preimage.extend_from_array(&nonce.to_be_bytes());
    env.crypto().sha256(&preimage).to_bytes()
}

// ── Persistence ──────────────────────────────────────────────────────────────

pub fn save(env: &Env, handle: &BytesN<32>, record: &Ciphertext) {
    ttl::set_persistent(env, &DataKey::Ciphertext(handle.clone()), record);
}

pub fn load(env: &Env, handle: &BytesN<32>) -> Result<Ciphertext, RuntimeError> {
    env.storage()
        .persistent()
        .get(&DataKey::Ciphertext(handle.clone()))
        .ok_or(RuntimeError::UnknownHandle)
}

pub fn try_load(env: &Env, handle: &BytesN<32>) -> Option<Ciphertext> {
    env.storage()
        .persistent()
        .get(&DataKey::Ciphertext(handle.clone()))
}

/// Store a computed value under a fresh handle owned by `owner`.
pub fn issue(env: &Env, owner: &Address, result: Operand, public: bool) -> BytesN<32> {
    let handle = next_handle(env);
    let record = Ciphertext {
        fhe_type: result.fhe_type,
        value: result.fhe_type.wrap(result.value),
        acl: vec![env, owner.clone()],
        public,
        binding: None,
    };
    save(env, &handle, &record);
    handle
}
