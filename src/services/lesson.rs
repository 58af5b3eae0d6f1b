//! Lesson data model and the parser that digs a JSON lesson out of
//! free-form model output.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub word: String,
    pub translation: String,
    #[serde(default)]
    pub pronunciation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonContent {
    pub lesson: String,
    pub vocabulary: Vec<VocabularyItem>,
}

impl LessonContent {
    /// The graceful-degradation arm: the raw model output becomes the lesson
    /// body and the vocabulary stays empty.
    pub fn raw(text: &str) -> Self {
        Self {
            lesson: text.to_string(),
            vocabulary: Vec::new(),
        }
    }
}

fn code_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").expect("valid literal regex"))
}

/// Picks the most promising JSON candidate out of the response text:
/// a fenced code block first, then the span from the first `{` to the last
/// `}`, then the whole text.
fn json_candidate(text: &str) -> &str {
    if let Some(captures) = code_block_re().captures(text) {
        if let Some(block) = captures.get(1) {
            return block.as_str();
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            return &text[start..=end];
        }
    }

    text
}

/// Decodes a lesson from raw model output. Never fails: anything that does
/// not decode into the expected object shape degrades to the raw text with
/// an empty vocabulary, so a garbled model reply still produces a readable
/// lesson response.
pub fn parse_lesson_response(text: &str) -> LessonContent {
    let candidate = json_candidate(text);

    let Ok(value) = serde_json::from_str::<serde_json::Value>(candidate) else {
        return LessonContent::raw(text);
    };
    let Some(object) = value.as_object() else {
        return LessonContent::raw(text);
    };

    let lesson = object
        .get("lesson_text")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| text.to_string());

    let vocabulary = object
        .get("vocabulary")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();

    LessonContent { lesson, vocabulary }
}
