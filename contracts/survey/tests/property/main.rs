#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based test suite entry point.
//!
//! Every case deploys a fresh runtime and survey, so the case count is kept
//! low. To raise it:
//!
//! ```bash
//! PROPTEST_CASES=64 cargo test --test property
//! ```

#[path = "../common/mod.rs"]
mod common;

mod disclosure;
mod ledger;
mod tally;

use proptest_derive::Arbitrary;

/// One in-range answer per question.
#[derive(Debug, Clone, Arbitrary)]
pub struct Ballot {
    #[proptest(strategy = "0u64..3")]
    area: u64,
    #[proptest(strategy = "0u64..4")]
    frequency: u64,
    #[proptest(strategy = "0u64..2")]
    concern: u64,
    #[proptest(strategy = "0u64..3")]
    deployment: u64,
    #[proptest(strategy = "0u64..4")]
    trust: u64,
}

impl Ballot {
    pub fn answers(&self) -> [u64; 5] {
        [
            self.area,
            self.frequency,
            self.concern,
            self.deployment,
            self.trust,
        ]
    }
}

/// Plaintext histogram of `ballots` for one question.
pub fn expected_counts(ballots: &[Ballot], question_id: u32) -> Vec<u64> {
    let option_count = survey::questions::option_count(question_id).unwrap();
    let mut counts = vec![0u64; option_count as usize];
    for ballot in ballots {
        counts[ballot.answers()[question_id as usize] as usize] += 1;
    }
    counts
}
