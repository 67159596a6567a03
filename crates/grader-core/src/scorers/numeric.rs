//! Numeric-Format Scorer
//!
//! **Question**: Is the extracted answer a plain non-negative integer?
//!
//! "Digit" is the Unicode Numeric_Type property, not ASCII: Arabic-Indic
//! and superscript digits count, while fractions and Roman numerals
//! (Numeric_Type=Numeric) do not.

use icu_properties::props::NumericType;
use icu_properties::CodePointMapData;

use crate::extract::extract_answer;
use crate::types::ScorerKind;

use super::{award, Scorer, FORMAT_REWARD};

/// Rewards answers made only of decimal digits.
pub struct NumericFormatScorer;

impl NumericFormatScorer {
    pub fn new() -> Self {
        Self
    }

    /// Non-empty and every char has Numeric_Type Decimal or Digit.
    fn is_digits(answer: &str) -> bool {
        let numeric_type = CodePointMapData::<NumericType>::new();
        !answer.is_empty()
            && answer.chars().all(|c| {
                matches!(
                    numeric_type.get(c),
                    NumericType::Decimal | NumericType::Digit
                )
            })
    }
}

impl Default for NumericFormatScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for NumericFormatScorer {
    fn kind(&self) -> ScorerKind {
        ScorerKind::NumericFormat
    }

    fn description(&self) -> &'static str {
        "Is the extracted answer a plain integer?"
    }

    fn max_score(&self) -> f64 {
        FORMAT_REWARD
    }

    fn score(&self, completion: &str, _expected_answer: Option<&str>) -> f64 {
        award(Self::is_digits(extract_answer(completion)), FORMAT_REWARD)
    }
}
