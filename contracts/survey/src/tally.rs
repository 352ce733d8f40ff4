//! # Tally Accumulator
//!
//! One encrypted 32-bit counter per (question, option). A ballot is folded
//! in without the contract ever learning which option it picked: the runtime
//! compares the answer with every option of the question, turns each result
//! into an encrypted 0/1 and adds it to that option's cell. All options are
//! evaluated on every ballot, so cost and control flow are the same whatever
//! the answer was.
//!
//! A question's cells live together as one row in instance storage, and the
//! whole row is updated by a single runtime call.

use common::{ttl, zero_handle, FheType, RuntimeClient};
use soroban_sdk::{contracttype, BytesN, Env, Vec};

use crate::questions::{Question, MAX_OPTIONS, QUESTIONS};
use crate::SurveyError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum TallyKey {
    Cells(u32),
}

fn store_row(env: &Env, question_id: u32, row: &Vec<BytesN<32>>) {
    env.storage().instance().set(&TallyKey::Cells(question_id), row);
    ttl::extend_instance(env);
}

/// Create an encrypted zero for every cell. Each cell gets its own handle so
/// that releasing one question never releases another.
pub fn initialize(env: &Env, runtime: &RuntimeClient) {
    let me = env.current_contract_address();

    for question in QUESTIONS.iter() {
        let mut row = Vec::new(env);
        for _ in 0..question.option_count() {
            row.push_back(runtime.trivial_encrypt(&me, &0, &FheType::Uint32));
        }
        store_row(env, question.id, &row);
    }
}

/// Fold a verified `answer` into every cell of `question`.
///
/// When the question is already disclosed the fresh cell handles are
/// released as they are issued, keeping "readable iff disclosed" true.
pub fn accumulate(
    env: &Env,
    runtime: &RuntimeClient,
    question: &Question,
    answer: &BytesN<32>,
    disclosed: bool,
) -> Result<(), SurveyError> {
    let me = env.current_contract_address();
    let row = cells(env, question)?;
    let updated = runtime.accumulate_one_hot(&me, &row, answer, &disclosed);
    store_row(env, question.id, &updated);
    Ok(())
}

/// Current handles of the question's real cells, in option order.
pub fn cells(env: &Env, question: &Question) -> Result<Vec<BytesN<32>>, SurveyError> {
    env.storage()
        .instance()
        .get(&TallyKey::Cells(question.id))
        .ok_or(SurveyError::NotInitialized)
}

/// Cells padded with the zero handle to [`MAX_OPTIONS`] entries.
pub fn encrypted_counts(env: &Env, question: &Question) -> Result<Vec<BytesN<32>>, SurveyError> {
    let mut out = cells(env, question)?;
    while out.len() < MAX_OPTIONS {
        out.push_back(zero_handle(env));
    }
    Ok(out)
}
