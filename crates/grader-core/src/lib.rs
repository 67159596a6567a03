//! # grader-core
//!
//! Deterministic reward composition for reasoning/answer formatted completions.
//!
//! A completion is expected to look like:
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
//! Five independent scorers inspect it and their outputs are summed:
//!
//! | Component | Reward |
//! |-----------|--------|
//! | correctness (exact match) | 2.0 |
//! | numeric format | 0.5 |
//! | strict format | 0.5 |
//! | loose format | 0.5 |
//! | tag count | up to 0.5, unbounded below |
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces the same reward
//! 2. **Total**: Scoring never fails; malformed text just scores low
//! 3. **Stateless**: Nothing is shared between calls, so any number may run in parallel
//!
//! ## Example
//!
//! ```rust
//! use grader_core::{grade, GradingRequest, Message};
//!
//! let request = GradingRequest::new(
//!     vec![Message::user("What is 6 * 7?")],
//!     "<reasoning>\nbecause\n</reasoning>\n<answer>\n42\n</answer>\n",
//! )
//! .with_answer("42");
//!
//! assert_eq!(grade(&request), 4.0);
//! ```

pub mod composer;
pub mod extract;
pub mod request;
pub mod scorers;
pub mod types;

// Re-export main types at crate root
pub use composer::Composer;
pub use extract::extract_answer;
pub use request::RequestError;
pub use scorers::{
    CorrectnessScorer, LooseFormatScorer, NumericFormatScorer, Scorer, StrictFormatScorer,
    TagCountScorer,
};
pub use types::{GradingRequest, Message, RewardBreakdown, ScorerKind};

/// Grade a request to a single reward.
///
/// This is the main entry point: the sum of all five sub-scores.
pub fn grade(request: &GradingRequest) -> f64 {
    Composer::new().reward(request)
}

/// Grade a request and keep the per-scorer components.
pub fn grade_breakdown(request: &GradingRequest) -> RewardBreakdown {
    Composer::new().breakdown(request)
}

/// Score a bare completion against an expected answer, without a prompt.
pub fn score_completion(completion: &str, expected_answer: &str) -> f64 {
    Composer::new()
        .score(completion, Some(expected_answer))
        .total()
}
