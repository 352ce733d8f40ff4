//! Shared types for the confidential survey contract suite.
//!
//! This crate provides:
//! - [`RuntimeError`]: error codes returned by the confidential-computation runtime.
//! - [`fhe`]: encrypted value types exchanged between contracts and clients.
//! - [`runtime`]: the cross-contract interface of the runtime and its generated client.
//! - [`ttl`]: storage time-to-live helpers used by every contract.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod fhe;
pub mod runtime;
pub mod ttl;

pub use fhe::*;
pub use runtime::*;

// ── Runtime error enum ───────────────────────────────────────────────────────

/// Errors raised by the confidential-computation runtime.
///
/// # Code ranges
/// | Range   | Purpose                           |
/// |---------|-----------------------------------|
/// | 1 – 9   | Input registration and proofs     |
/// | 10 – 19 | Ciphertext arithmetic             |
/// | 20 – 29 | Access control and decryption     |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum RuntimeError {
    // ── Inputs (1–9) ─────────────────────────────────────────
    /// No ciphertext or input binding exists for the handle.
    UnknownHandle = 1,

    /// The supplied proof does not match the one issued for the input bundle.
    InvalidProof = 2,

    /// The input was bound to a different contract than the verifying caller.
    WrongContract = 3,

    /// The input was bound to a different user than the claimed submitter.
    WrongUser = 4,

    /// An input bundle must contain at least one value.
    EmptyInput = 5,

    /// An input bundle exceeds [`fhe::MAX_INPUTS_PER_BUNDLE`].
    TooManyInputs = 6,

    /// A clear value is not below its declared bound.
    ValueOutOfRange = 7,

    /// A declared bound is zero or wider than the value type.
    InvalidBound = 8,

    /// The input's declared bound is wider than the verifier accepts.
    RangeNotBound = 9,

    // ── Arithmetic (10–19) ───────────────────────────────────
    /// Operand types are incompatible with the operation.
    TypeMismatch = 10,

    // ── Access control (20–29) ───────────────────────────────
    /// The account is not on the handle's access list.
    AccessDenied = 20,

    /// The handle has not been released for public decryption.
    NotPubliclyDecryptable = 21,
}

#[cfg(test)]
mod tests {
    use super::RuntimeError;

    #[test]
    fn runtime_error_discriminants_are_stable() {
        assert_eq!(RuntimeError::UnknownHandle as u32, 1);
        assert_eq!(RuntimeError::InvalidProof as u32, 2);
        assert_eq!(RuntimeError::RangeNotBound as u32, 9);
        assert_eq!(RuntimeError::TypeMismatch as u32, 10);
        assert_eq!(RuntimeError::AccessDenied as u32, 20);
        assert_eq!(RuntimeError::NotPubliclyDecryptable as u32, 21);
    }
}
