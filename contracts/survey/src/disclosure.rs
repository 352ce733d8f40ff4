//! # Disclosure Gate
//!
//! One flag per question, `Sealed` until someone asks for the results and
//! `Disclosed` forever after. The gate only flips the flag and issues the
//! runtime grants; the runtime's access list is what actually keeps sealed
//! tallies unreadable.

use common::{ttl, RuntimeClient};
use soroban_sdk::{contracttype, Address, Env};

use crate::{questions::Question, tally, SurveyError};

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum DisclosureState {
    Sealed = 0,
    Disclosed = 1,
}

impl DisclosureState {
    pub fn is_disclosed(&self) -> bool {
        matches!(self, DisclosureState::Disclosed)
    }

    /// The only transition. Returns the next state and whether it changed.
    pub fn disclose(self) -> (DisclosureState, bool) {
        match self {
            DisclosureState::Sealed => (DisclosureState::Disclosed, true),
            DisclosureState::Disclosed => (DisclosureState::Disclosed, false),
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum DisclosureKey {
    Disclosure(u32),
}

pub fn state(env: &Env, question_id: u32) -> DisclosureState {
    env.storage()
        .instance()
        .get(&DisclosureKey::Disclosure(question_id))
        .unwrap_or(DisclosureState::Sealed)
}

/// Disclose `question` and release its current cells.
///
/// Repeating the call on a disclosed question is accepted: the flag stays put
/// and the grants are issued again for whatever handles the cells hold now.
/// `requester` is also allowed for user-scoped decryption.
pub fn disclose(
    env: &Env,
    runtime: &RuntimeClient,
    question: &Question,
    requester: &Address,
) -> Result<bool, SurveyError> {
    let (next, changed) = state(env, question.id).disclose();
    if changed {
        env.storage()
            .instance()
            .set(&DisclosureKey::Disclosure(question.id), &next);
        ttl::extend_instance(env);
    }

    let me = env.current_contract_address();
    for cell in tally::cells(env, question)?.iter() {
        runtime.make_publicly_decryptable(&me, &cell);
        runtime.allow(&me, &cell, requester);
    }

    Ok(changed)
}
