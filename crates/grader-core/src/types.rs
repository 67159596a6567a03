//! Core data types for grading.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single role-tagged prompt message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Chat role (e.g., "system", "user", "assistant")
    pub role: String,

    /// Message text; `null` or a missing field reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A request to grade one completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GradingRequest {
    /// The prompt the completion answers, oldest message first
    pub prompt_messages: Vec<Message>,

    /// The model-generated text being scored
    pub completion: String,

    /// Free-form metadata; `answer` holds the expected answer
    #[serde(default)]
    pub extra_data: Option<Map<String, Value>>,
}

impl GradingRequest {
    /// Create a request with no metadata.
    pub fn new(prompt_messages: Vec<Message>, completion: impl Into<String>) -> Self {
        Self {
            prompt_messages,
            completion: completion.into(),
            extra_data: None,
        }
    }

    /// Set `extra_data.answer`, creating the metadata map if needed.
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.extra_data
            .get_or_insert_with(Map::new)
            .insert("answer".to_string(), Value::String(answer.into()));
        self
    }

    /// The expected answer.
    ///
    /// Missing metadata or a missing `answer` key read as the empty string.
    /// A present `answer` that is not a string (a number, `null`, ...) is
    /// `None`: it cannot equal any extracted text.
    pub fn expected_answer(&self) -> Option<&str> {
        match self.extra_data.as_ref().and_then(|data| data.get("answer")) {
            None => Some(""),
            Some(answer) => answer.as_str(),
        }
    }

    /// Content of the last prompt message, or empty if there is no prompt.
    pub fn question(&self) -> &str {
        self.prompt_messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or("")
    }
}

/// Identifies one of the five sub-scorers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    Correctness,
    NumericFormat,
    StrictFormat,
    LooseFormat,
    TagCount,
}

impl ScorerKind {
    /// All scorers, in composition order.
    pub const ALL: [ScorerKind; 5] = [
        ScorerKind::Correctness,
        ScorerKind::NumericFormat,
        ScorerKind::StrictFormat,
        ScorerKind::LooseFormat,
        ScorerKind::TagCount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerKind::Correctness => "correctness",
            ScorerKind::NumericFormat => "numeric_format",
            ScorerKind::StrictFormat => "strict_format",
            ScorerKind::LooseFormat => "loose_format",
            ScorerKind::TagCount => "tag_count",
        }
    }
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-scorer components of a reward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RewardBreakdown {
    pub correctness: f64,
    pub numeric_format: f64,
    pub strict_format: f64,
    pub loose_format: f64,
    pub tag_count: f64,
}

impl RewardBreakdown {
    /// Sum of all components, accumulated in composition order.
    pub fn total(&self) -> f64 {
        ScorerKind::ALL.iter().map(|kind| self.get(*kind)).sum()
    }

    /// Component for one scorer.
    pub fn get(&self, kind: ScorerKind) -> f64 {
        match kind {
            ScorerKind::Correctness => self.correctness,
            ScorerKind::NumericFormat => self.numeric_format,
            ScorerKind::StrictFormat => self.strict_format,
            ScorerKind::LooseFormat => self.loose_format,
            ScorerKind::TagCount => self.tag_count,
        }
    }

    pub(crate) fn set(&mut self, kind: ScorerKind, value: f64) {
        match kind {
            ScorerKind::Correctness => self.correctness = value,
            ScorerKind::NumericFormat => self.numeric_format = value,
            ScorerKind::StrictFormat => self.strict_format = value,
            ScorerKind::LooseFormat => self.loose_format = value,
            ScorerKind::TagCount => self.tag_count = value,
        }
    }
}
