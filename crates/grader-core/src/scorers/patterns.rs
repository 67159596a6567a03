//! Shared markers and structural patterns for scorers.
//!
//! The extractor and the tag-count scorer work on literal markers; the two
//! format scorers work on the regexes below. Patterns are anchored at the
//! start of the text, mirroring a match-from-start check.

use lazy_static::lazy_static;
use regex::Regex;

pub const REASONING_OPEN: &str = "<reasoning>";
pub const REASONING_CLOSE: &str = "</reasoning>";
pub const ANSWER_OPEN: &str = "<answer>";
pub const ANSWER_CLOSE: &str = "</answer>";

lazy_static! {
    /// Strict layout: every tag on its own line, text ends after `</answer>\n`.
    ///
    /// The end anchor tolerates one extra final newline, the same way a
    /// `$` anchor in a match-from-start engine does.
    pub static ref STRICT_FORMAT_PATTERN: Regex = Regex::new(
        r"(?s)\A<reasoning>\n.*?\n</reasoning>\n<answer>\n.*?\n</answer>\n\n?\z"
    ).unwrap();

    /// Loose layout: tags in order, any whitespace between the blocks, no end anchor.
    ///
    /// Whitespace is the [`is_space`] set, so the information separators
    /// U+001C..U+001F are added to `\s`.
    pub static ref LOOSE_FORMAT_PATTERN: Regex = Regex::new(
        r"(?s)\A<reasoning>.*?</reasoning>[\s\x1C-\x1F]*<answer>.*?</answer>"
    ).unwrap();
}

/// Whitespace for trimming and layout checks: Unicode `White_Space` plus
/// the information separators U+001C..U+001F.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Check if text follows the strict reasoning/answer layout.
pub fn matches_strict_format(text: &str) -> bool {
    STRICT_FORMAT_PATTERN.is_match(text)
}

/// Check if text follows the loose reasoning/answer layout.
pub fn matches_loose_format(text: &str) -> bool {
    LOOSE_FORMAT_PATTERN.is_match(text)
}

/// Number of non-overlapping occurrences of `needle` in `text`.
pub fn count_occurrences(text: &str, needle: &str) -> usize {
    text.matches(needle).count()
}

/// Length in chars of whatever follows the last `needle`.
///
/// When `needle` is absent the whole text counts as trailing.
pub fn trailing_len(text: &str, needle: &str) -> usize {
    text.rsplit(needle).next().map_or(0, |tail| tail.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_format() {
        assert!(matches_strict_format(
            "<reasoning>\nR\n</reasoning>\n<answer>\nA\n</answer>\n"
        ));
        assert!(matches_strict_format(
            "<reasoning>\nline 1\nline 2\n</reasoning>\n<answer>\nA\n</answer>\n"
        ));
        assert!(!matches_strict_format(
            "<reasoning>\nR\n</reasoning>\n<answer>\nA\n</answer>"
        ));
        assert!(!matches_strict_format(
            " <reasoning>\nR\n</reasoning>\n<answer>\nA\n</answer>\n"
        ));
        assert!(!matches_strict_format(
            "<reasoning>\nR\n</reasoning>\n<answer>\nA\n</answer>\nextra"
        ));
    }

    #[test]
    fn test_strict_format_tolerates_one_final_newline() {
        assert!(matches_strict_format(
            "<reasoning>\nR\n</reasoning>\n<answer>\nA\n</answer>\n\n"
        ));
        assert!(!matches_strict_format(
            "<reasoning>\nR\n</reasoning>\n<answer>\nA\n</answer>\n\n\n"
        ));
    }

    #[test]
    fn test_loose_format() {
        assert!(matches_loose_format("<reasoning>R</reasoning>\n\n<answer>A</answer>"));
        assert!(matches_loose_format("<reasoning>R</reasoning><answer>A</answer> trailing"));
        assert!(matches_loose_format(
            "<reasoning>\nR\n</reasoning>\n<answer>\nA\n</answer>\n"
        ));
        assert!(!matches_loose_format("prefix <reasoning>R</reasoning><answer>A</answer>"));
        assert!(!matches_loose_format("<reasoning>R</reasoning> x <answer>A</answer>"));
    }

    #[test]
    fn test_loose_format_accepts_information_separators() {
        assert!(matches_loose_format("<reasoning>R</reasoning>\x1c\x1f<answer>A</answer>"));
        assert!(matches_loose_format("<reasoning>R</reasoning>\u{2003}<answer>A</answer>"));
        assert!(!matches_loose_format("<reasoning>R</reasoning>\x1b<answer>A</answer>"));
    }

    #[test]
    fn test_is_space() {
        let spaces = [
            ' ', '\t', '\n', '\x0b', '\x0c', '\r', '\x1c', '\x1d', '\x1e', '\x1f', '\u{85}',
            '\u{a0}', '\u{3000}',
        ];
        for c in spaces {
            assert!(is_space(c), "{:?}", c);
        }
        for c in ['\x1b', '\u{200b}', 'a', '0'] {
            assert!(!is_space(c), "{:?}", c);
        }
    }

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences("<a>\n<a>\n", "<a>\n"), 2);
        assert_eq!(count_occurrences("nothing", "<a>"), 0);
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
    }

    #[test]
    fn test_trailing_len() {
        assert_eq!(trailing_len("x\n</answer>\nabc", "\n</answer>\n"), 3);
        assert_eq!(trailing_len("x\n</answer>\n", "\n</answer>\n"), 0);
        assert_eq!(trailing_len("héllo", "</answer>"), 5);
    }
}
