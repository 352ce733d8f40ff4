use soroban_sdk::contracterror;

/// Errors returned by the survey contract.
///
/// Every rejection is atomic: a call that returns one of these leaves the
/// ledger, the tallies and the disclosure flags exactly as they were.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SurveyError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// The voter already has a recorded ballot.
    AlreadySubmitted = 3,
    /// The runtime rejected the input proof for this contract and voter.
    InvalidProof = 4,
    /// An answer handle is unknown to the runtime or is not an 8-bit value.
    InvalidCiphertext = 5,
    /// An answer was not range-bound to its question's option count.
    AnswerOutOfRange = 6,
    QuestionOutOfRange = 7,
    /// A ballot must carry exactly one answer per question.
    InvalidAnswerCount = 8,
    CounterOverflow = 9,
}
