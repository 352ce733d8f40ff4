//! Cross-contract interface of the confidential-computation runtime.
//!
//! Contracts that compute on encrypted values call the runtime through
//! [`RuntimeClient`], generated from [`ConfidentialRuntime`]. Every operation
//! takes the calling contract's address as `caller`; the runtime requires its
//! authorisation, which the host grants implicitly to the direct invoker.
//!
//! Result handles are placed on the caller's access list, so a contract can
//! chain operations on values it produced without further grants.

use soroban_sdk::{contractclient, Address, BytesN, Env, Vec};

use crate::{FheType, RuntimeError};

#[contractclient(name = "RuntimeClient")]
pub trait ConfidentialRuntime {
    /// Check that `handle` was registered for (`caller`, `user`) under `proof`,
    /// has type `fhe_type`, and was range-bound to at most `bound`. On success
    /// the caller is allowed on the handle.
    fn verify_input(
        env: Env,
        caller: Address,
        user: Address,
        handle: BytesN<32>,
        proof: BytesN<32>,
        fhe_type: FheType,
        bound: u32,
    ) -> Result<BytesN<32>, RuntimeError>;

    /// Encrypt a public constant.
    fn trivial_encrypt(
        env: Env,
        caller: Address,
        value: u64,
        fhe_type: FheType,
    ) -> Result<BytesN<32>, RuntimeError>;

    /// Wrapping addition of two ciphertexts of the same type.
    fn add(
        env: Env,
        caller: Address,
        lhs: BytesN<32>,
        rhs: BytesN<32>,
    ) -> Result<BytesN<32>, RuntimeError>;

    /// Encrypted boolean `lhs == scalar`.
    fn eq_scalar(
        env: Env,
        caller: Address,
        lhs: BytesN<32>,
        scalar: u64,
    ) -> Result<BytesN<32>, RuntimeError>;

    /// `condition ? if_true : if_false` without revealing `condition`.
    fn select(
        env: Env,
        caller: Address,
        condition: BytesN<32>,
        if_true: BytesN<32>,
        if_false: BytesN<32>,
    ) -> Result<BytesN<32>, RuntimeError>;

    /// Fold one encrypted answer into a row of encrypted counters.
    ///
    /// For every position `o` of `cells`, computes
    /// `cells[o] + select(answer == o, 1, 0)` and returns the new handles in
    /// the same order. Every position is evaluated whatever the answer is,
    /// and only the results are stored. With `public` set the results are
    /// released for public decryption as they are issued.
    fn accumulate_one_hot(
        env: Env,
        caller: Address,
        cells: Vec<BytesN<32>>,
        answer: BytesN<32>,
        public: bool,
    ) -> Result<Vec<BytesN<32>>, RuntimeError>;

    /// Add `account` to the access list of `handle`.
    fn allow(
        env: Env,
        caller: Address,
        handle: BytesN<32>,
        account: Address,
    ) -> Result<(), RuntimeError>;

    /// Release `handle` for decryption by anyone.
    fn make_publicly_decryptable(
        env: Env,
        caller: Address,
        handle: BytesN<32>,
    ) -> Result<(), RuntimeError>;
}
