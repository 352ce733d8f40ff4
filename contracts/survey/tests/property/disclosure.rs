//! The disclosure gate modelled as a state machine.
//!
//! Random interleavings of submissions and disclosure requests are replayed
//! against a plaintext model.
//!
//! Invariants tested:
//! - Once a question is public it stays public
//! - A question is public iff a disclosure was requested for it
//! - Disclosed cells always decrypt to the model's counts, including cells
//!   produced by ballots submitted after disclosure

use proptest::collection::vec;
use proptest::prelude::*;
use proptest_derive::Arbitrary;
use survey::DisclosureState;

use crate::common::{decrypt_public, setup_test_env, submit, voter};
use crate::{expected_counts, Ballot};

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Submit(Ballot),
    Disclose {
        #[proptest(strategy = "0u32..5")]
        question_id: u32,
    },
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_disclosure_is_monotonic(ops in vec(any::<Op>(), 1..8)) {
        let ctx = setup_test_env();
        let mut submitted: Vec<Ballot> = Vec::new();
        let mut disclosed = [false; 5];

        for op in &ops {
            match op {
                Op::Submit(ballot) => {
                    let v = voter(&ctx);
                    submit(&ctx, &v, ballot.answers());
                    submitted.push(ballot.clone());
                }
                Op::Disclose { question_id } => {
                    let requester = voter(&ctx);
                    ctx.survey.make_question_results_public(&requester, question_id);
                    disclosed[*question_id as usize] = true;
                }
            }

            for question_id in 0..5u32 {
                let expected = if disclosed[question_id as usize] {
                    DisclosureState::Disclosed
                } else {
                    DisclosureState::Sealed
                };
                prop_assert_eq!(ctx.survey.disclosure_state(&question_id), expected);

                if disclosed[question_id as usize] {
                    prop_assert_eq!(
                        decrypt_public(&ctx, question_id),
                        expected_counts(&submitted, question_id)
                    );
                }
            }
        }
    }
}
