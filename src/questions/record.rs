//! A single question-bank row.

use serde::{Deserialize, Serialize};

/// Chapter label carried by the sentinel record returned when the bank
/// cannot be read.
pub const ERROR_CHAPTER: &str = "Error";

/// One exam question with its reference answer.
///
/// CSV headers are matched by name; the spreadsheet-style `Question` /
/// `Answer` / `Chapter` headings are accepted alongside the JSON field
/// names. Extra columns are ignored and a missing `chapter` column yields an
/// empty label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(alias = "Question")]
    pub question: String,
    #[serde(alias = "Answer", alias = "answer")]
    pub official_answer: String,
    #[serde(default, alias = "Chapter")]
    pub chapter: String,
}

impl QuestionRecord {
    /// Sentinel handed to the client instead of an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            question: format!("Error: {}", message.into()),
            official_answer: String::new(),
            chapter: ERROR_CHAPTER.to_string(),
        }
    }

    /// `true` for records produced by [`QuestionRecord::error`].
    pub fn is_error(&self) -> bool {
        self.chapter == ERROR_CHAPTER && self.official_answer.is_empty()
    }
}
