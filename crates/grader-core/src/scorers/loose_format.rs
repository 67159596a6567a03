//! Loose Format Scorer
//!
//! **Question**: Are the reasoning and answer blocks present and in order?
//!
//! Only the start of the text is anchored. Newlines are optional and
//! anything may follow `</answer>`.

use crate::types::ScorerKind;

use super::patterns::matches_loose_format;
use super::{award, Scorer, FORMAT_REWARD};

/// Rewards tags in the right order, regardless of line layout.
pub struct LooseFormatScorer;

impl LooseFormatScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LooseFormatScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for LooseFormatScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::LooseFormat
    }

    fn description(&self) -> &'static str {
        "Are the tags present and in order?"
    }

    fn max_score(&self) -> f64 {
        FORMAT_REWARD
    }

    fn score(&self, completion: &str, _expected_answer: Option<&str>) -> f64 {
        award(matches_loose_format(completion), FORMAT_REWARD)
    }
}
