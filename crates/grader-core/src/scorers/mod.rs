//! The five sub-scorers.
//!
//! Each scorer answers one question about a completion and returns a
//! bounded contribution to the reward. Scorers are stateless, independent
//! of each other, and total over arbitrary input.
//!
//! | Scorer | Question | Max |
//! |--------|----------|-----|
//! | [`CorrectnessScorer`] | Does the extracted answer equal the expected one? | 2.0 |
//! | [`NumericFormatScorer`] | Is the extracted answer a plain integer? | 0.5 |
//! | [`StrictFormatScorer`] | Does the text follow the line-by-line layout exactly? | 0.5 |
//! | [`LooseFormatScorer`] | Are the tags present and in order? | 0.5 |
//! | [`TagCountScorer`] | Does each marker appear exactly once, with nothing trailing? | 0.5 |

mod correctness;
mod loose_format;
mod numeric;
pub mod patterns;
mod strict_format;
mod tag_count;

pub use correctness::CorrectnessScorer;
pub use loose_format::LooseFormatScorer;
pub use numeric::NumericFormatScorer;
pub use strict_format::StrictFormatScorer;
pub use tag_count::TagCountScorer;

use crate::types::ScorerKind;

/// Reward for an exact answer match.
pub const CORRECTNESS_REWARD: f64 = 2.0;

/// Reward for each satisfied format check.
pub const FORMAT_REWARD: f64 = 0.5;

/// Reward for each structural marker appearing exactly once.
pub const TAG_REWARD: f64 = 0.125;

/// Penalty per char of text trailing the closing answer tag.
pub const TRAILING_PENALTY_PER_CHAR: f64 = 0.001;

/// Trait for all scorers.
pub trait Scorer: Send + Sync {
    /// Which scorer this is.
    fn kind(&self) -> ScorerKind;

    /// The question this scorer answers.
    fn description(&self) -> &'static str;

    /// Upper bound on `score`.
    fn max_score(&self) -> f64;

    /// Score one completion. `expected_answer` is ignored by scorers that
    /// only look at structure; `None` is an answer that cannot match anything.
    ///
    /// Scorers never see the prompt. Diagnostic events carry the question
    /// only when emitted inside the composer's `grade` span; a scorer called
    /// on its own logs without it.
    fn score(&self, completion: &str, expected_answer: Option<&str>) -> f64;
}

/// `reward` if `passed`, else zero.
pub(crate) fn award(passed: bool, reward: f64) -> f64 {
    if passed {
        reward
    } else {
        0.0
    }
}
