#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the survey is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub runtime: Address,
    pub timestamp: u64,
}

/// Fired when a ballot is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SurveySubmittedEvent {
    pub voter: Address,
    pub total_submissions: u32,
    pub timestamp: u64,
}

/// Fired on every disclosure request, including repeats.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionResultsMadePublicEvent {
    pub question_id: u32,
    pub requester: Address,
    pub newly_disclosed: bool,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, runtime: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            runtime,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_survey_submitted(env: &Env, voter: Address, total_submissions: u32) {
    env.events().publish(
        (symbol_short!("SUBMITTED"), voter.clone()),
        SurveySubmittedEvent {
            voter,
            total_submissions,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_results_made_public(
    env: &Env,
    question_id: u32,
    requester: Address,
    newly_disclosed: bool,
) {
    env.events().publish(
        (symbol_short!("PUBLIC"), question_id),
        QuestionResultsMadePublicEvent {
            question_id,
            requester,
            newly_disclosed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
