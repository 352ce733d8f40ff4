#![no_std]

//! # Confidential-Computation Runtime
//!
//! A coprocessor contract that owns every ciphertext in the survey suite.
//! Contracts never see clear values: they hold 32-byte handles and ask the
//! runtime to add, compare and select on them. Clients encrypt their inputs
//! here and receive a proof binding the resulting handles to one target
//! contract and one user.
//!
//! ## Key Components
//! - `FheRuntime`: the contract; implements [`ConfidentialRuntime`] for other
//!   contracts and exposes input registration and decryption to clients.
//! - `storage`: one record per handle holding the body, access list, public
//!   flag and input binding.
//! - `ops`: the homomorphic operations themselves.
//! - `proof`: digest that binds an input bundle to (contract, user, ranges).
//!
//! Ciphertext bodies are evaluated host-side (a mock coprocessor); the access
//! control and proof checks are enforced exactly as a networked coprocessor
//! would enforce them.

mod acl;
pub mod events;
pub mod ops;
mod proof;
mod storage;

pub use crate::storage::{Ciphertext, InputBinding};
pub use common::{ClearInput, FheType, InputBundle, RuntimeError};

use common::{ConfidentialRuntime, MAX_INPUTS_PER_BUNDLE};
use ops::Operand;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

#[contract]
pub struct FheRuntime;

/// A clear input must fit its type and lie strictly below its declared bound.
fn validate_input(input: &ClearInput) -> Result<(), RuntimeError> {
    let bound = u64::from(input.bound);
    if bound == 0 || bound > input.fhe_type.cardinality() {
        return Err(RuntimeError::InvalidBound);
    }
    if input.value >= bound {
        return Err(RuntimeError::ValueOutOfRange);
    }
    Ok(())
}

/// Load an operand after checking that `caller` may compute on it.
fn operand(env: &Env, caller: &Address, handle: &BytesN<32>) -> Result<Operand, RuntimeError> {
    let record = storage::load(env, handle)?;
    acl::require_allowed(&record, caller)?;
    Ok(record.operand())
}

#[contractimpl]
impl FheRuntime {
    // ── Client-side entry points ────────────────────────────────────────────

    /// Encrypt `inputs` for use by `contract` on behalf of `user`.
    ///
    /// Every call issues fresh handles, so encrypting the same clear values
    /// twice yields two distinct bundles that are equally valid. Fresh inputs
    /// have an empty access list until `contract` verifies them.
    pub fn encrypt_inputs(
        env: Env,
        contract: Address,
        user: Address,
        inputs: Vec<ClearInput>,
    ) -> Result<InputBundle, RuntimeError> {
        user.require_auth();

        if inputs.is_empty() {
            return Err(RuntimeError::EmptyInput);
        }
        if inputs.len() > MAX_INPUTS_PER_BUNDLE {
            return Err(RuntimeError::TooManyInputs);
        }
        for input in inputs.iter() {
            validate_input(&input)?;
        }

        let mut handles: Vec<BytesN<32>> = Vec::new(&env);
        let mut bounds: Vec<u32> = Vec::new(&env);
        for input in inputs.iter() {
            handles.push_back(storage::next_handle(&env));
            bounds.push_back(input.bound);
        }

        let proof = proof::bundle_proof(&env, &contract, &user, &handles, &bounds);
        for (handle, input) in handles.iter().zip(inputs.iter()) {
            let record = Ciphertext {
                fhe_type: input.fhe_type,
                value: input.value,
                acl: Vec::new(&env),
                public: false,
                binding: Some(InputBinding {
                    contract: contract.clone(),
                    user: user.clone(),
                    proof: proof.clone(),
                    bound: input.bound,
                }),
            };
            storage::save(&env, &handle, &record);
        }

        events::publish_inputs_registered(&env, contract, user, handles.len(), proof.clone());

        Ok(InputBundle { handles, proof })
    }

    /// Decrypt handles that have been released for public decryption.
    /// Fails on the first handle that is still sealed.
    pub fn public_decrypt(env: Env, handles: Vec<BytesN<32>>) -> Result<Vec<u64>, RuntimeError> {
        let mut clear: Vec<u64> = Vec::new(&env);
        for handle in handles.iter() {
            let record = storage::try_load(&env, &handle)
                .filter(|record| record.public)
                .ok_or(RuntimeError::NotPubliclyDecryptable)?;
            clear.push_back(record.value);
        }
        Ok(clear)
    }

    /// Decrypt `handle` for `user`. Both the user and the contract that owns
    /// the value must be on its access list.
    pub fn user_decrypt(
        env: Env,
        user: Address,
        contract: Address,
        handle: BytesN<32>,
    ) -> Result<u64, RuntimeError> {
        user.require_auth();
        let record = storage::try_load(&env, &handle).ok_or(RuntimeError::AccessDenied)?;
        acl::require_allowed(&record, &user)?;
        acl::require_allowed(&record, &contract)?;
        Ok(record.value)
    }

    // ── Views ───────────────────────────────────────────────────────────────

    pub fn is_allowed(env: Env, handle: BytesN<32>, account: Address) -> bool {
        storage::try_load(&env, &handle).is_some_and(|record| acl::is_allowed(&record, &account))
    }

    pub fn is_publicly_decryptable(env: Env, handle: BytesN<32>) -> bool {
        storage::try_load(&env, &handle).is_some_and(|record| record.public)
    }

    pub fn ciphertext_type(env: Env, handle: BytesN<32>) -> Option<FheType> {
        storage::try_load(&env, &handle).map(|record| record.fhe_type)
    }

    /// Number of handles issued so far.
    pub fn handle_count(env: Env) -> u64 {
        storage::handle_count(&env)
    }
}

#[contractimpl]
impl ConfidentialRuntime for FheRuntime {
    fn verify_input(
        env: Env,
        caller: Address,
        user: Address,
        handle: BytesN<32>,
        proof: BytesN<32>,
        fhe_type: FheType,
        bound: u32,
    ) -> Result<BytesN<32>, RuntimeError> {
        caller.require_auth();

        let mut record = storage::load(&env, &handle)?;
        let binding = record
            .binding
            .clone()
            .ok_or(RuntimeError::UnknownHandle)?;
        if binding.contract != caller {
            return Err(RuntimeError::WrongContract);
        }
        if binding.user != user {
            return Err(RuntimeError::WrongUser);
        }
        if binding.proof != proof {
            return Err(RuntimeError::InvalidProof);
        }
        if record.fhe_type != fhe_type {
            return Err(RuntimeError::TypeMismatch);
        }
        // a tighter declared range is fine, a wider one is not
        if binding.bound > bound {
            return Err(RuntimeError::RangeNotBound);
        }

        if acl::grant(&mut record, &caller) {
            storage::save(&env, &handle, &record);
        }
        Ok(handle)
    }

    fn trivial_encrypt(
        env: Env,
        caller: Address,
        value: u64,
        fhe_type: FheType,
    ) -> Result<BytesN<32>, RuntimeError> {
        caller.require_auth();
        if value >= fhe_type.cardinality() {
            return Err(RuntimeError::ValueOutOfRange);
        }
        Ok(storage::issue(
            &env,
            &caller,
            Operand::trivial(fhe_type, value),
            false,
        ))
    }

    fn add(
        env: Env,
        caller: Address,
        lhs: BytesN<32>,
        rhs: BytesN<32>,
    ) -> Result<BytesN<32>, RuntimeError> {
        caller.require_auth();
        let lhs = operand(&env, &caller, &lhs)?;
        let rhs = operand(&env, &caller, &rhs)?;
        let sum = ops::add(lhs, rhs)?;
        Ok(storage::issue(&env, &caller, sum, false))
    }

    fn eq_scalar(
        env: Env,
        caller: Address,
        lhs: BytesN<32>,
        scalar: u64,
    ) -> Result<BytesN<32>, RuntimeError> {
        caller.require_auth();
        let lhs = operand(&env, &caller, &lhs)?;
        Ok(storage::issue(&env, &caller, ops::eq_scalar(lhs, scalar), false))
    }

    fn select(
        env: Env,
        caller: Address,
        condition: BytesN<32>,
        if_true: BytesN<32>,
        if_false: BytesN<32>,
    ) -> Result<BytesN<32>, RuntimeError> {
        caller.require_auth();
        let condition = operand(&env, &caller, &condition)?;
        let if_true = operand(&env, &caller, &if_true)?;
        let if_false = operand(&env, &caller, &if_false)?;
        let chosen = ops::select(condition, if_true, if_false)?;
        Ok(storage::issue(&env, &caller, chosen, false))
    }

    fn accumulate_one_hot(
        env: Env,
        caller: Address,
        cells: Vec<BytesN<32>>,
        answer: BytesN<32>,
        public: bool,
    ) -> Result<Vec<BytesN<32>>, RuntimeError> {
        caller.require_auth();
        let answer = operand(&env, &caller, &answer)?;

        let mut updated: Vec<BytesN<32>> = Vec::new(&env);
        for (option, cell) in cells.iter().enumerate() {
            let cell = operand(&env, &caller, &cell)?;
            let sum = ops::one_hot_step(cell, answer, option as u64)?;
            updated.push_back(storage::issue(&env, &caller, sum, public));
        }
        Ok(updated)
    }

    fn allow(
        env: Env,
        caller: Address,
        handle: BytesN<32>,
        account: Address,
    ) -> Result<(), RuntimeError> {
        caller.require_auth();
        let mut record = storage::load(&env, &handle)?;
        acl::require_allowed(&record, &caller)?;
        if acl::grant(&mut record, &account) {
            storage::save(&env, &handle, &record);
        }
        events::publish_access_granted(&env, handle, caller, account);
        Ok(())
    }

    fn make_publicly_decryptable(
        env: Env,
        caller: Address,
        handle: BytesN<32>,
    ) -> Result<(), RuntimeError> {
        caller.require_auth();
        let mut record = storage::load(&env, &handle)?;
        acl::require_allowed(&record, &caller)?;
        if !record.public {
            acl::mark_public(&mut record);
            storage::save(&env, &handle, &record);
        }
        events::publish_public_decryption(&env, handle, caller);
        Ok(())
    }
}
