//! Per-handle access control.
//!
//! An account may compute on or user-decrypt a handle only while it is on the
//! handle's access list. Public decryption is a separate one-way flag. Both
//! live on the ciphertext record; callers load, adjust and save it.

use common::RuntimeError;
use soroban_sdk::Address;

use crate::storage::Ciphertext;

pub fn is_allowed(record: &Ciphertext, account: &Address) -> bool {
    record.acl.contains(account)
}

pub fn require_allowed(record: &Ciphertext, account: &Address) -> Result<(), RuntimeError> {
    if !is_allowed(record, account) {
        return Err(RuntimeError::AccessDenied);
    }
    Ok(())
}

/// Add `account` to the access list. Returns false if it was already there.
pub fn grant(record: &mut Ciphertext, account: &Address) -> bool {
    if is_allowed(record, account) {
        return false;
    }
    record.acl.push_back(account.clone());
    true
}

pub fn mark_public(record: &mut Ciphertext) {
    record.public = true;
}
