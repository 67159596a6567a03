//! Correctness Scorer
//!
//! **Question**: Does the extracted answer equal the expected answer?
//!
//! Comparison is exact string equality after extraction; no numeric or
//! case normalization is applied. An expected answer that is not a string
//! (`None`) matches nothing, not even an empty extraction.
//!
//! The diagnostic event has no `question` field of its own; it inherits one
//! from the composer's `grade` span.

use crate::extract::extract_answer;
use crate::types::ScorerKind;

use super::{award, Scorer, CORRECTNESS_REWARD};

/// Exact-match correctness scorer.
pub struct CorrectnessScorer;

impl CorrectnessScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CorrectnessScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for CorrectnessScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::Correctness
    }

    fn description(&self) -> &'static str {
        "Does the extracted answer equal the expected answer?"
    }

    fn max_score(&self) -> f64 {
        CORRECTNESS_REWARD
    }

    fn score(&self, completion: &str, expected_answer: Option<&str>) -> f64 {
        let extracted = extract_answer(completion);
        let matched = expected_answer.is_some_and(|expected| extracted == expected);

        tracing::info!(
            expected = ?expected_answer,
            response = %completion,
            extracted = %extracted,
            matched,
            "Correctness check"
        );

        award(matched, CORRECTNESS_REWARD)
    }
}
