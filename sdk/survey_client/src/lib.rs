#![no_std]

//! Off-chain helpers for taking part in a confidential survey.
//!
//! Answers are validated against the question catalog, encrypted into one
//! range-bound bundle, and submitted at most once per address. Released
//! tallies can be read back through public or requester-scoped decryption.

pub mod answers;
pub mod input;

pub use answers::{parse_answer, SurveyAnswers};
pub use input::EncryptedInputBuilder;

use fhe_runtime::{FheRuntimeClient, InputBundle, RuntimeError};
use soroban_sdk::{Address, BytesN, Env, InvokeError, Vec};
use survey::{questions, ConfidentialSurveyClient, SurveyError};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClientError {
    /// An answer is not a valid option index for its question.
    InvalidAnswer,
    QuestionOutOfRange,
    /// The survey is not initialised or a runtime call failed outright.
    RuntimeUnavailable,
    /// The survey contract refused the call.
    Rejected(SurveyError),
    /// The requested tallies have not been released.
    NotDisclosed,
}

impl From<SurveyError> for ClientError {
    fn from(err: SurveyError) -> Self {
        match err {
            SurveyError::QuestionOutOfRange => ClientError::QuestionOutOfRange,
            other => ClientError::Rejected(other),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    Submitted { total_submissions: u32 },
    /// The address already has a ballot on record; nothing was sent.
    AlreadySubmitted,
}

/// Flatten the nested result of a generated `try_*` survey call.
fn survey_call<T, E>(
    result: Result<Result<T, E>, Result<SurveyError, InvokeError>>,
) -> Result<T, ClientError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Err(Ok(err)) => Err(err.into()),
        _ => Err(ClientError::RuntimeUnavailable),
    }
}

/// A participant's view of one deployed survey and its runtime.
pub struct SurveyClient<'a> {
    env: Env,
    survey: ConfidentialSurveyClient<'a>,
    runtime: FheRuntimeClient<'a>,
}

impl<'a> SurveyClient<'a> {
    /// Connect to the survey at `survey`, resolving its runtime.
    pub fn connect(env: &Env, survey: &Address) -> Result<Self, ClientError> {
        let survey = ConfidentialSurveyClient::new(env, survey);
        let runtime = survey
            .try_runtime()
            .ok()
            .and_then(|r| r.ok())
            .ok_or(ClientError::RuntimeUnavailable)?;

        Ok(Self {
            env: env.clone(),
            runtime: FheRuntimeClient::new(env, &runtime),
            survey,
        })
    }

    pub fn survey_address(&self) -> &Address {
        &self.survey.address
    }

    pub fn has_submitted(&self, voter: &Address) -> bool {
        self.survey.has_submitted(voter)
    }

    /// Encrypt all five answers into one bundle, each bound to its
    /// question's option count.
    pub fn encrypt_answers(
        &self,
        voter: &Address,
        answers: &SurveyAnswers,
    ) -> Result<InputBundle, ClientError> {
        let mut builder = EncryptedInputBuilder::new(&self.env, &self.survey.address, voter);
        for (question, value) in questions::QUESTIONS.iter().zip(answers.values()) {
            builder.add8_in_range(value, question.option_count());
        }
        builder.encrypt(&self.runtime)
    }

    /// Submit `answers` unless `voter` already has a ballot on record.
    pub fn submit_once(
        &self,
        voter: &Address,
        answers: &SurveyAnswers,
    ) -> Result<SubmitOutcome, ClientError> {
        if self.has_submitted(voter) {
            return Ok(SubmitOutcome::AlreadySubmitted);
        }

        let bundle = self.encrypt_answers(voter, answers)?;
        match survey_call(
            self.survey
                .try_submit_survey(voter, &bundle.handles, &bundle.proof),
        ) {
            Ok(()) => Ok(SubmitOutcome::Submitted {
                total_submissions: self.survey.total_submissions(),
            }),
            Err(ClientError::Rejected(SurveyError::AlreadySubmitted)) => {
                Ok(SubmitOutcome::AlreadySubmitted)
            }
            Err(err) => Err(err),
        }
    }

    /// Current handles of the question's real cells, padding dropped.
    fn cells(&self, question_id: u32) -> Result<Vec<BytesN<32>>, ClientError> {
        let option_count =
            questions::option_count(question_id).ok_or(ClientError::QuestionOutOfRange)?;
        let padded = survey_call(self.survey.try_get_encrypted_counts(&question_id))?;
        Ok(padded.slice(0..option_count))
    }

    /// Publicly decrypt the per-option counts of `question_id`.
    ///
    /// With `make_public` set, disclosure is requested first on behalf of
    /// `requester`; otherwise the question must already be disclosed.
    pub fn decrypt_question(
        &self,
        requester: &Address,
        question_id: u32,
        make_public: bool,
    ) -> Result<Vec<u64>, ClientError> {
        questions::question(question_id).ok_or(ClientError::QuestionOutOfRange)?;
        if make_public {
            survey_call(
                self.survey
                    .try_make_question_results_public(requester, &question_id),
            )?;
        }

        let cells = self.cells(question_id)?;
        match self.runtime.try_public_decrypt(&cells) {
            Ok(Ok(counts)) => Ok(counts),
            Err(Ok(RuntimeError::NotPubliclyDecryptable)) => Err(ClientError::NotDisclosed),
            _ => Err(ClientError::RuntimeUnavailable),
        }
    }

    /// Decrypt the counts of `question_id` for `user` alone. The user must
    /// have been allowed on the cells, which happens when they request
    /// disclosure.
    pub fn user_decrypt_question(
        &self,
        user: &Address,
        question_id: u32,
    ) -> Result<Vec<u64>, ClientError> {
        let cells = self.cells(question_id)?;
        let mut counts = Vec::new(&self.env);
        for cell in cells.iter() {
            let value = match self
                .runtime
                .try_user_decrypt(user, &self.survey.address, &cell)
            {
                Ok(Ok(value)) => value,
                Err(Ok(RuntimeError::AccessDenied)) => return Err(ClientError::NotDisclosed),
                _ => return Err(ClientError::RuntimeUnavailable),
            };
            counts.push_back(value);
        }
        Ok(counts)
    }
}
