//! # Ballot Ledger
//!
//! Records which addresses have submitted and how many ballots were accepted.
//! Only existence is kept; answer handles are consumed by the tally in the
//! same invocation and never stored against the voter.

use common::ttl;
use soroban_sdk::{contracttype, Address, Env};

use crate::SurveyError;

// ── Storage key ──────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum LedgerKey {
    Submitted(Address),
    SubmissionCount,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn has_submitted(env: &Env, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&LedgerKey::Submitted(voter.clone()))
        .unwrap_or(false)
}

pub fn total_submissions(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&LedgerKey::SubmissionCount)
        .unwrap_or(0u32)
}

/// Fail with [`SurveyError::AlreadySubmitted`] if `voter` has a ballot.
pub fn ensure_not_submitted(env: &Env, voter: &Address) -> Result<(), SurveyError> {
    if has_submitted(env, voter) {
        return Err(SurveyError::AlreadySubmitted);
    }
    Ok(())
}

/// Mark `voter` as submitted and bump the counter. Returns the new total.
/// Callers check [`ensure_not_submitted`] first.
pub fn record_submission(env: &Env, voter: &Address) -> Result<u32, SurveyError> {
    let next = total_submissions(env)
        .checked_add(1)
        .ok_or(SurveyError::CounterOverflow)?;

    ttl::set_persistent(env, &LedgerKey::Submitted(voter.clone()), &true);
    env.storage()
        .instance()
        .set(&LedgerKey::SubmissionCount, &next);
    ttl::extend_instance(env);

    Ok(next)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
