//! Client-side assembly of encrypted input bundles.

use fhe_runtime::{ClearInput, FheRuntimeClient, FheType, InputBundle, RuntimeError};
use soroban_sdk::{Address, Env, Vec};

use crate::ClientError;

/// Collects clear values for one encryption request bound to a
/// (contract, user) pair. All values end up under a single proof.
pub struct EncryptedInputBuilder {
    contract: Address,
    user: Address,
    inputs: Vec<ClearInput>,
}

impl EncryptedInputBuilder {
    pub fn new(env: &Env, contract: &Address, user: &Address) -> Self {
        Self {
            contract: contract.clone(),
            user: user.clone(),
            inputs: Vec::new(env),
        }
    }

    /// Add an 8-bit value with no range tighter than the type itself.
    pub fn add8(&mut self, value: u8) -> &mut Self {
        self.add8_in_range(value, FheType::Uint8.cardinality() as u32)
    }

    /// Add an 8-bit value whose proof will attest `value < bound`.
    pub fn add8_in_range(&mut self, value: u8, bound: u32) -> &mut Self {
        self.inputs.push_back(ClearInput {
            fhe_type: FheType::Uint8,
            value: u64::from(value),
            bound,
        });
        self
    }

    pub fn len(&self) -> u32 {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Register the collected values with `runtime`.
    ///
    /// Every call produces fresh handles and a fresh proof, so a failed
    /// submission can simply be retried with a new bundle.
    pub fn encrypt(&self, runtime: &FheRuntimeClient) -> Result<InputBundle, ClientError> {
        match runtime.try_encrypt_inputs(&self.contract, &self.user, &self.inputs) {
            Ok(Ok(bundle)) => Ok(bundle),
            Err(Ok(RuntimeError::ValueOutOfRange | RuntimeError::InvalidBound)) => {
                Err(ClientError::InvalidAnswer)
            }
            _ => Err(ClientError::RuntimeUnavailable),
        }
    }
}
