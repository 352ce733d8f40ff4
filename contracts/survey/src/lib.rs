#![no_std]

//! # Confidential Survey
//!
//! Five-question survey whose answers are never seen in the clear. Voters
//! submit one ballot of five encrypted 8-bit option indices with a single
//! input proof; the contract folds each answer into per-option encrypted
//! counters through the confidential-computation runtime. Any question's
//! counters can later be released for public decryption, one-way.
//!
//! ## Key Components
//! - `ledger`: one ballot per address and the submission counter.
//! - `tally`: branch-free accumulation into encrypted per-option cells.
//! - `disclosure`: the per-question `Sealed` → `Disclosed` gate.
//! - `questions`: the compile-time question catalog.

pub mod disclosure;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod questions;
pub mod tally;

pub use disclosure::DisclosureState;
pub use errors::SurveyError;
pub use questions::{QuestionInfo, MAX_OPTIONS, QUESTION_COUNT};

use common::{ttl, FheType, RuntimeClient, RuntimeError};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Address, BytesN, Env, Symbol, Vec,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const RUNTIME: Symbol = symbol_short!("RUNTIME");

fn runtime_client(env: &Env) -> Result<RuntimeClient<'_>, SurveyError> {
    let runtime: Address = env
        .storage()
        .instance()
        .get(&RUNTIME)
        .ok_or(SurveyError::NotInitialized)?;
    Ok(RuntimeClient::new(env, &runtime))
}

/// Ask the runtime to verify one answer and translate its verdict.
fn verify_answer(
    env: &Env,
    runtime: &RuntimeClient,
    voter: &Address,
    handle: &BytesN<32>,
    proof: &BytesN<32>,
    option_count: u32,
) -> Result<BytesN<32>, SurveyError> {
    let me = env.current_contract_address();
    match runtime.try_verify_input(&me, voter, handle, proof, &FheType::Uint8, &option_count) {
        Ok(Ok(verified)) => Ok(verified),
        Err(Ok(RuntimeError::RangeNotBound)) => Err(SurveyError::AnswerOutOfRange),
        Err(Ok(RuntimeError::UnknownHandle | RuntimeError::TypeMismatch)) => {
            Err(SurveyError::InvalidCiphertext)
        }
        _ => Err(SurveyError::InvalidProof),
    }
}

#[contract]
pub struct ConfidentialSurvey;

#[contractimpl]
impl ConfidentialSurvey {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bind the survey to a confidential-computation runtime and create the
    /// encrypted zero tallies. Can only run once per deployment.
    pub fn initialize(env: Env, runtime: Address) -> Result<(), SurveyError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(SurveyError::AlreadyInitialized);
        }

        env.storage().instance().set(&RUNTIME, &runtime);
        env.storage().instance().set(&INITIALIZED, &true);
        ttl::extend_instance(&env);

        let client = RuntimeClient::new(&env, &runtime);
        tally::initialize(&env, &client);

        events::publish_initialized(&env, runtime);

        Ok(())
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn runtime(env: Env) -> Result<Address, SurveyError> {
        env.storage()
            .instance()
            .get(&RUNTIME)
            .ok_or(SurveyError::NotInitialized)
    }

    // ── Catalog ─────────────────────────────────────────────────────────────

    pub fn question_count(_env: Env) -> u32 {
        QUESTION_COUNT
    }

    pub fn max_options(_env: Env) -> u32 {
        MAX_OPTIONS
    }

    pub fn option_count(_env: Env, question_id: u32) -> Result<u32, SurveyError> {
        questions::option_count(question_id).ok_or(SurveyError::QuestionOutOfRange)
    }

    pub fn question(env: Env, question_id: u32) -> Result<QuestionInfo, SurveyError> {
        let question =
            questions::question(question_id).ok_or(SurveyError::QuestionOutOfRange)?;
        Ok(question.to_info(&env))
    }

    // ── Ballot ledger ───────────────────────────────────────────────────────

    pub fn has_submitted(env: Env, user: Address) -> bool {
        ledger::has_submitted(&env, &user)
    }

    pub fn total_submissions(env: Env) -> u32 {
        ledger::total_submissions(&env)
    }

    /// Submit one encrypted ballot.
    ///
    /// `answers[i]` is the handle for question `i`; `proof` is the single
    /// bundle proof the runtime issued for all five. Each answer must have
    /// been range-bound to its question's option count when encrypted.
    pub fn submit_survey(
        env: Env,
        voter: Address,
        answers: Vec<BytesN<32>>,
        proof: BytesN<32>,
    ) -> Result<(), SurveyError> {
        Self::require_initialized(&env);
        voter.require_auth();

        // 1. One ballot per address, before any runtime call.
        ledger::ensure_not_submitted(&env, &voter)?;

        // 2. Exactly one answer per question.
        if answers.len() != QUESTION_COUNT {
            return Err(SurveyError::InvalidAnswerCount);
        }

        // 3. Every answer must be bound to this contract, this voter and its range.
        let runtime = runtime_client(&env)?;
        let mut verified: Vec<BytesN<32>> = Vec::new(&env);
        for (question, handle) in questions::QUESTIONS.iter().zip(answers.iter()) {
            verified.push_back(verify_answer(
                &env,
                &runtime,
                &voter,
                &handle,
                &proof,
                question.option_count(),
            )?);
        }

        // 4. Record the ballot.
        let total = ledger::record_submission(&env, &voter)?;

        // 5. Fold every answer into every option of its question.
        for (question, answer) in questions::QUESTIONS.iter().zip(verified.iter()) {
            let disclosed = disclosure::state(&env, question.id).is_disclosed();
            tally::accumulate(&env, &runtime, question, &answer, disclosed)?;
        }

        events::publish_survey_submitted(&env, voter, total);

        Ok(())
    }

    // ── Tallies ─────────────────────────────────────────────────────────────

    /// Encrypted per-option counts for `question_id`, padded to
    /// [`MAX_OPTIONS`] with zero handles. Padding entries carry no value.
    pub fn get_encrypted_counts(
        env: Env,
        question_id: u32,
    ) -> Result<Vec<BytesN<32>>, SurveyError> {
        Self::require_initialized(&env);
        let question =
            questions::question(question_id).ok_or(SurveyError::QuestionOutOfRange)?;
        tally::encrypted_counts(&env, question)
    }

    // ── Disclosure gate ─────────────────────────────────────────────────────

    /// Release the counts of `question_id` for public decryption. Open to
    /// anyone; repeating it on a disclosed question re-issues the grants.
    pub fn make_question_results_public(
        env: Env,
        requester: Address,
        question_id: u32,
    ) -> Result<(), SurveyError> {
        Self::require_initialized(&env);
        requester.require_auth();

        let question =
            questions::question(question_id).ok_or(SurveyError::QuestionOutOfRange)?;
        let runtime = runtime_client(&env)?;
        let newly_disclosed = disclosure::disclose(&env, &runtime, question, &requester)?;

        events::publish_results_made_public(&env, question_id, requester, newly_disclosed);

        Ok(())
    }

    pub fn disclosure_state(env: Env, question_id: u32) -> Result<DisclosureState, SurveyError> {
        questions::question(question_id).ok_or(SurveyError::QuestionOutOfRange)?;
        Ok(disclosure::state(&env, question_id))
    }

    pub fn is_question_public(env: Env, question_id: u32) -> Result<bool, SurveyError> {
        Ok(Self::disclosure_state(env, question_id)?.is_disclosed())
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn require_initialized(env: &Env) {
        if !env.storage().instance().has(&INITIALIZED) {
            panic_with_error!(env, SurveyError::NotInitialized);
        }
    }
}
