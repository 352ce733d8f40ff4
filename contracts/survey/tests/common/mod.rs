#![allow(dead_code)]

use fhe_runtime::{ClearInput, FheRuntime, FheRuntimeClient, FheType, InputBundle};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, Vec};
use survey::{questions, ConfidentialSurvey, ConfidentialSurveyClient};

pub struct TestContext {
    pub env: Env,
    pub survey: ConfidentialSurveyClient<'static>,
    pub runtime: FheRuntimeClient<'static>,
}

/// Deploys a runtime and a survey bound to it.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();
    deploy(env)
}

/// Like [`setup_test_env`], but every invocation is held to the default
/// network limits on budget and ledger footprint.
pub fn setup_with_network_limits() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    deploy(env)
}

fn deploy(env: Env) -> TestContext {
    let runtime_id = env.register(FheRuntime, ());
    let runtime = FheRuntimeClient::new(&env, &runtime_id);

    let survey_id = env.register(ConfidentialSurvey, ());
    let survey = ConfidentialSurveyClient::new(&env, &survey_id);
    survey.initialize(&runtime_id);

    TestContext {
        env,
        survey,
        runtime,
    }
}

pub fn voter(ctx: &TestContext) -> Address {
    Address::generate(&ctx.env)
}

/// Encrypts five answers for `voter`, each range-bound to its question.
pub fn encrypt_ballot(ctx: &TestContext, voter: &Address, answers: [u64; 5]) -> InputBundle {
    let bounds: [u32; 5] = core::array::from_fn(|i| questions::option_count(i as u32).unwrap());
    encrypt_with_bounds(ctx, voter, answers, bounds)
}

pub fn encrypt_with_bounds(
    ctx: &TestContext,
    voter: &Address,
    answers: [u64; 5],
    bounds: [u32; 5],
) -> InputBundle {
    let mut inputs: Vec<ClearInput> = Vec::new(&ctx.env);
    for (value, bound) in answers.into_iter().zip(bounds) {
        inputs.push_back(ClearInput {
            fhe_type: FheType::Uint8,
            value,
            bound,
        });
    }
    ctx.runtime
        .encrypt_inputs(&ctx.survey.address, voter, &inputs)
}

pub fn submit(ctx: &TestContext, voter: &Address, answers: [u64; 5]) {
    let bundle = encrypt_ballot(ctx, voter, answers);
    ctx.survey
        .submit_survey(voter, &bundle.handles, &bundle.proof);
}

/// Requests disclosure of `question_id` and publicly decrypts its real cells.
pub fn disclose_and_decrypt(ctx: &TestContext, question_id: u32) -> std::vec::Vec<u64> {
    let requester = voter(ctx);
    ctx.survey
        .make_question_results_public(&requester, &question_id);
    decrypt_public(ctx, question_id)
}

/// Publicly decrypts the real cells of `question_id` without requesting disclosure.
pub fn decrypt_public(ctx: &TestContext, question_id: u32) -> std::vec::Vec<u64> {
    let handles = real_cells(ctx, question_id);
    ctx.runtime.public_decrypt(&handles).iter().collect()
}

pub fn real_cells(ctx: &TestContext, question_id: u32) -> Vec<BytesN<32>> {
    let option_count = ctx.survey.option_count(&question_id);
    ctx.survey
        .get_encrypted_counts(&question_id)
        .slice(0..option_count)
}
