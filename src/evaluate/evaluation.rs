//! Request and result payloads of `POST /api/evaluate`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the client submits: the question context plus its raw transcript.
///
/// Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationRequest {
    pub question: String,
    pub official_answer: String,
    pub user_answer: String,
}

/// Corrected transcript plus scores.
///
/// Scores are nominally 0–10 but not clamped; whatever the model returns is
/// passed through. Keys beyond the schema are kept in `extra` so a reply is
/// forwarded exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub corrected_text: String,
    pub score_knowledge: i64,
    pub score_english: i64,
    pub score_sufficiency: i64,
    pub summary: String,
    pub feedback: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Evaluation {
    /// Zero-score result for an empty or near-empty transcript.
    pub fn no_speech() -> Self {
        Self::zero(
            "No speech detected.",
            "No speech detected.",
            "Please check your microphone.",
        )
    }

    /// Zero-score result used when the LLM call fails in any way.
    ///
    /// The untouched transcript is echoed back so the candidate's words are
    /// not lost.
    pub fn fallback(user_answer: &str) -> Self {
        Self::zero(user_answer, "System Error", "API Error. Please try again.")
    }

    fn zero(corrected_text: &str, summary: &str, feedback: &str) -> Self {
        Self {
            corrected_text: corrected_text.to_string(),
            score_knowledge: 0,
            score_english: 0,
            score_sufficiency: 0,
            summary: summary.to_string(),
            feedback: feedback.to_string(),
            extra: Map::new(),
        }
    }

    pub fn has_zero_scores(&self) -> bool {
        self.score_knowledge == 0 && self.score_english == 0 && self.score_sufficiency == 0
    }
}
