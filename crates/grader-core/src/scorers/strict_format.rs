//! Strict Format Scorer
//!
//! **Question**: Does the completion follow the line-by-line layout exactly?
//!
//! ```text
//! <reasoning>
//! ...
//! </reasoning>
//! <answer>
//! ...
//! </answer>
//! ```
//!
//! The text must start with `<reasoning>` and end right after the final
//! newline.

use crate::types::ScorerKind;

use super::patterns::matches_strict_format;
use super::{award, Scorer, FORMAT_REWARD};

/// Rewards the exact newline-delimited layout.
pub struct StrictFormatScorer;

impl StrictFormatScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StrictFormatScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for StrictFormatScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::StrictFormat
    }

    fn description(&self) -> &'static str {
        "Does the text follow the line-by-line layout exactly?"
    }

    fn max_score(&self) -> f64 {
        FORMAT_REWARD
    }

    fn score(&self, completion: &str, _expected_answer: Option<&str>) -> f64 {
        award(matches_strict_format(completion), FORMAT_REWARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_shape() {
        let scorer = StrictFormatScorer::new();
        let text = "<reasoning>\nbecause\n</reasoning>\n<answer>\n42\n</answer>\n";
        assert_eq!(scorer.score(text, None), 0.5);
    }

    #[test]
    fn test_missing_trailing_newline() {
        let scorer = StrictFormatScorer::new();
        let text = "<reasoning>\nR\n</reasoning>\n<answer>\nA\n</answer>";
        assert_eq!(scorer.score(text, None), 0.0);
    }

    #[test]
    fn test_inline_tags_rejected() {
        let scorer = StrictFormatScorer::new();
        let text = "<reasoning>R</reasoning>\n<answer>A</answer>\n";
        assert_eq!(scorer.score(text, None), 0.0);
    }

    #[test]
    fn test_leading_text_rejected() {
        let scorer = StrictFormatScorer::new();
        let text = "Sure!\n<reasoning>\nR\n</reasoning>\n<answer>\nA\n</answer>\n";
        assert_eq!(scorer.score(text, None), 0.0);
    }
}
