//! Encrypted value types shared by the runtime, the survey and off-chain clients.
//!
//! A ciphertext is never passed around directly. Contracts exchange 32-byte
//! *handles* that reference a ciphertext held by the runtime; whoever holds a
//! handle still needs an access-list entry to compute on or decrypt it.

use soroban_sdk::{contracttype, BytesN, Env, Vec};

/// Maximum number of values a single input bundle may carry.
pub const MAX_INPUTS_PER_BUNDLE: u32 = 16;

/// Encrypted integer types supported by the runtime.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum FheType {
    Bool = 0,
    Uint8 = 1,
    Uint32 = 2,
}

impl FheType {
    pub fn bit_width(&self) -> u32 {
        match self {
            FheType::Bool => 1,
            FheType::Uint8 => 8,
            FheType::Uint32 => 32,
        }
    }

    /// Number of distinct clear values the type can hold.
    pub fn cardinality(&self) -> u64 {
        1u64 << self.bit_width()
    }

    /// Reduce `value` modulo the type width.
    pub fn wrap(&self, value: u64) -> u64 {
        value & (self.cardinality() - 1)
    }
}

/// A clear value submitted for encryption, together with the exclusive upper
/// bound the accompanying proof will attest to.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClearInput {
    pub fhe_type: FheType,
    pub value: u64,
    pub bound: u32,
}

/// Handles produced for one encryption request plus the single proof that
/// binds all of them to a (contract, user) pair.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputBundle {
    pub handles: Vec<BytesN<32>>,
    pub proof: BytesN<32>,
}

/// The all-zero handle. Never issued by the runtime; used as padding.
pub fn zero_handle(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

pub fn is_zero_handle(handle: &BytesN<32>) -> bool {
    handle.to_array().iter().all(|&b| b == 0)
}
