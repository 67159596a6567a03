//! Tag-Count Scorer
//!
//! **Question**: Does each structural marker appear exactly once, with
//! nothing trailing the closing answer tag?
//!
//! Four independent checks, each worth 0.125 when its marker occurs exactly
//! once (zero or several occurrences earn nothing):
//!
//! | Marker | Penalty when present |
//! |--------|----------------------|
//! | `<reasoning>\n` | none |
//! | `\n</reasoning>\n` | none |
//! | `\n<answer>\n` | 0.001 per char after the last `\n</answer>\n` |
//! | `\n</answer>` | 0.001 per char after the last `\n</answer>`, minus one |
//!
//! The result is not clamped: long trailing text drives it below zero.

use crate::types::ScorerKind;

use super::patterns::{count_occurrences, trailing_len};
use super::{Scorer, TAG_REWARD, TRAILING_PENALTY_PER_CHAR};

const REASONING_OPEN_LINE: &str = "<reasoning>\n";
const REASONING_CLOSE_LINE: &str = "\n</reasoning>\n";
const ANSWER_OPEN_LINE: &str = "\n<answer>\n";
const ANSWER_CLOSE_LINE: &str = "\n</answer>\n";
const ANSWER_CLOSE_TAIL: &str = "\n</answer>";

/// Incremental marker-count scorer with trailing-text penalties.
pub struct TagCountScorer;

impl TagCountScorer {
    pub fn new() -> Self {
        Self
    }

    fn occurs_once(text: &str, marker: &str) -> bool {
        count_occurrences(text, marker) == 1
    }
}

impl Default for TagCountScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for TagCountScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::TagCount
    }

    fn description(&self) -> &'static str {
        "Does each marker appear exactly once, with nothing trailing?"
    }

    fn max_score(&self) -> f64 {
        4.0 * TAG_REWARD
    }

    fn score(&self, completion: &str, _expected_answer: Option<&str>) -> f64 {
        let mut score = 0.0;

        if Self::occurs_once(completion, REASONING_OPEN_LINE) {
            score += TAG_REWARD;
        }

        if Self::occurs_once(completion, REASONING_CLOSE_LINE) {
            score += TAG_REWARD;
        }

        if Self::occurs_once(completion, ANSWER_OPEN_LINE) {
            score += TAG_REWARD;
            let trailing = trailing_len(completion, ANSWER_CLOSE_LINE) as f64;
            score -= trailing * TRAILING_PENALTY_PER_CHAR;
        }

        if Self::occurs_once(completion, ANSWER_CLOSE_TAIL) {
            score += TAG_REWARD;
            // The newline that usually follows the tag is not counted.
            let trailing = trailing_len(completion, ANSWER_CLOSE_TAIL) as f64 - 1.0;
            score -= trailing * TRAILING_PENALTY_PER_CHAR;
        }

        score
    }
}
