//! Answer extraction from `<answer>...</answer>` formatted completions.
//!
//! Extraction never fails. Missing markers degrade to a best-effort
//! substring:
//!
//! | Input | Result |
//! |-------|--------|
//! | `...<answer>\n42\n</answer>\n` | `42` |
//! | no `<answer>` | whole text, cut at the first `</answer>`, trimmed |
//! | no `</answer>` after the last `<answer>` | everything after the last `<answer>`, trimmed |

use crate::scorers::patterns::{is_space, ANSWER_CLOSE, ANSWER_OPEN};

/// Extract the answer from a completion.
///
/// Takes the text after the last `<answer>`, cuts it at the first
/// `</answer>` that follows, and trims surrounding whitespace (see
/// [`is_space`]).
pub fn extract_answer(text: &str) -> &str {
    // rsplit always yields at least one segment
    let after_open = text.rsplit(ANSWER_OPEN).next().unwrap_or(text);
    let before_close = after_open.split(ANSWER_CLOSE).next().unwrap_or(after_open);
    before_close.trim_matches(is_space)
}
