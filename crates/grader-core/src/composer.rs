//! Composer: sums the five sub-scores into one reward.
//!
//! The composition is fixed:
//! 1. Every scorer sees the same completion and expected answer
//! 2. No scorer sees another scorer's output
//! 3. The reward is the plain sum, in [`ScorerKind::ALL`] order
//!
//! There are no weights to tune; the reward shape is part of the training
//! signal contract.

use tracing::info_span;

use crate::scorers::{
    CorrectnessScorer, LooseFormatScorer, NumericFormatScorer, Scorer, StrictFormatScorer,
    TagCountScorer,
};
use crate::types::{GradingRequest, RewardBreakdown};

/// The Composer owns the scorers and aggregates their output.
pub struct Composer {
    correctness: CorrectnessScorer,
    numeric_format: NumericFormatScorer,
    strict_format: StrictFormatScorer,
    loose_format: LooseFormatScorer,
    tag_count: TagCountScorer,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            correctness: CorrectnessScorer::new(),
            numeric_format: NumericFormatScorer::new(),
            strict_format: StrictFormatScorer::new(),
            loose_format: LooseFormatScorer::new(),
            tag_count: TagCountScorer::new(),
        }
    }

    /// The scorers, in composition order.
    pub fn scorers(&self) -> [&dyn Scorer; 5] {
        [
            &self.correctness,
            &self.numeric_format,
            &self.strict_format,
            &self.loose_format,
            &self.tag_count,
        ]
    }

    /// Upper bound on the reward.
    pub fn max_reward(&self) -> f64 {
        self.scorers().iter().map(|s| s.max_score()).sum()
    }

    /// Score a completion against an expected answer, component by component.
    ///
    /// `None` means the expected answer is present but unusable, so nothing
    /// can match it.
    pub fn score(&self, completion: &str, expected_answer: Option<&str>) -> RewardBreakdown {
        let mut breakdown = RewardBreakdown::default();
        for scorer in self.scorers() {
            breakdown.set(scorer.kind(), scorer.score(completion, expected_answer));
        }
        breakdown
    }

    /// Grade a request, component by component.
    pub fn breakdown(&self, request: &GradingRequest) -> RewardBreakdown {
        let span = info_span!("grade", question = %request.question());
        let _guard = span.enter();

        let breakdown = self.score(&request.completion, request.expected_answer());

        tracing::debug!(
            correctness = breakdown.correctness,
            numeric_format = breakdown.numeric_format,
            strict_format = breakdown.strict_format,
            loose_format = breakdown.loose_format,
            tag_count = breakdown.tag_count,
            reward = breakdown.total(),
            "Completion graded"
        );

        breakdown
    }

    /// Grade a request to a single reward.
    pub fn reward(&self, request: &GradingRequest) -> f64 {
        self.breakdown(request).total()
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}
