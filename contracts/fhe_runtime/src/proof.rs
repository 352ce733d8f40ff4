//! Input proofs.
//!
//! A bundle proof commits to the target contract, the submitting user, and
//! every (handle, bound) pair in issue order. Changing any of them yields a
//! different digest, so a proof cannot be replayed for another contract, user
//! or range.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

const PROOF_DOMAIN: &[u8] = b"fhe-runtime/input-proof/v1";

pub fn bundle_proof(
    env: &Env,
    contract: &Address,
    user: &Address,
    handles: &Vec<BytesN<32>>,
    bounds: &Vec<u32>,
) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, PROOF_DOMAIN);
    preimage.append(&contract.clone().to_xdr(env));
    preimage.append(&user.clone().to_xdr(env));
    for (handle, bound) in handles.iter().zip(bounds.iter()) {
        preimage.extend_from_array(&handle.to_array());
        preimage.extend_from_array(&bound.to_be_bytes());
    }
    env.crypto().sha256(&preimage).to_bytes()
}
