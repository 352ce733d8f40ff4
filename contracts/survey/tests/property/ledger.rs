//! One ballot per address, whatever the ballots contain.
//!
//! Invariants tested:
//! - A second ballot from the same address is always `AlreadySubmitted`
//! - A rejected ballot never moves the counter
//! - A value outside its question's range is never accepted

use proptest::prelude::*;
use survey::{questions, SurveyError};

use crate::common::{encrypt_ballot, encrypt_with_bounds, setup_test_env, submit, voter};
use crate::Ballot;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_second_ballot_always_rejected(first in any::<Ballot>(), second in any::<Ballot>()) {
        let ctx = setup_test_env();
        let alice = voter(&ctx);
        submit(&ctx, &alice, first.answers());

        let bundle = encrypt_ballot(&ctx, &alice, second.answers());
        let result = ctx.survey.try_submit_survey(&alice, &bundle.handles, &bundle.proof);

        match result {
            Err(Ok(e)) => prop_assert_eq!(e, SurveyError::AlreadySubmitted),
            _ => prop_assert!(false, "Expected AlreadySubmitted error"),
        }
        prop_assert_eq!(ctx.survey.total_submissions(), 1);
    }

    #[test]
    fn prop_out_of_range_answer_never_counted(
        ballot in any::<Ballot>(),
        question_id in 0u32..5,
        excess in 0u64..8,
    ) {
        let ctx = setup_test_env();
        let alice = voter(&ctx);

        let option_count = questions::option_count(question_id).unwrap();
        let mut answers = ballot.answers();
        answers[question_id as usize] = option_count as u64 + excess;
        let mut bounds: [u32; 5] =
            core::array::from_fn(|i| questions::option_count(i as u32).unwrap());
        bounds[question_id as usize] = option_count + excess as u32 + 1;

        let bundle = encrypt_with_bounds(&ctx, &alice, answers, bounds);
        let result = ctx.survey.try_submit_survey(&alice, &bundle.handles, &bundle.proof);

        match result {
            Err(Ok(e)) => prop_assert_eq!(e, SurveyError::AnswerOutOfRange),
            _ => prop_assert!(false, "Expected AnswerOutOfRange error"),
        }
        prop_assert!(!ctx.survey.has_submitted(&alice));
        prop_assert_eq!(ctx.survey.total_submissions(), 0);
    }
}
