//! Homomorphic counts always agree with the plaintext they were built from.
//!
//! Invariants tested:
//! - Decrypted counts of every question equal the plaintext histogram
//! - The counts of every question sum to `total_submissions`

use proptest::collection::vec;
use proptest::prelude::*;

use crate::common::{disclose_and_decrypt, setup_test_env, submit, voter};
use crate::{expected_counts, Ballot};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_counts_match_plaintext_histogram(ballots in vec(any::<Ballot>(), 1..5)) {
        let ctx = setup_test_env();
        for ballot in &ballots {
            let v = voter(&ctx);
            submit(&ctx, &v, ballot.answers());
        }

        for question_id in 0..5u32 {
            let counts = disclose_and_decrypt(&ctx, question_id);
            prop_assert_eq!(counts, expected_counts(&ballots, question_id));
        }
    }

    #[test]
    fn prop_counts_sum_to_submissions(ballots in vec(any::<Ballot>(), 0..5)) {
        let ctx = setup_test_env();
        for ballot in &ballots {
            let v = voter(&ctx);
            submit(&ctx, &v, ballot.answers());
        }

        let total = ctx.survey.total_submissions() as u64;
        prop_assert_eq!(total, ballots.len() as u64);
        for question_id in 0..5u32 {
            let sum: u64 = disclose_and_decrypt(&ctx, question_id).iter().sum();
            prop_assert_eq!(sum, total);
        }
    }
}
