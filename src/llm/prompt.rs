//! Grading prompt builder.
//!
//! [`PromptBuilder`] produces a `(system_msg, user_msg)` pair. The system
//! message sets the examiner persona and demands JSON-only output; the user
//! message carries the question, the reference answer, the raw transcript,
//! the two-step task (repair terminology, then score) and the JSON schema the
//! reply must follow.

use crate::config::ExamConfig;

/// JSON schema embedded verbatim in every grading prompt.
const RESPONSE_SCHEMA: &str = r#"{
    "corrected_text": "string",
    "score_knowledge": integer,
    "score_english": integer,
    "score_sufficiency": integer,
    "summary": "string",
    "feedback": "string"
}"#;

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds grading prompts for one examiner persona and subject domain.
///
/// # Example
/// ```rust
/// use exam_coach::llm::PromptBuilder;
///
/// let builder = PromptBuilder::new("Senior Flight Examiner", "aviation");
/// let (system, user) = builder.build_chat("What is V1?", "Decision speed.", "vee one is the");
/// assert!(system.contains("JSON"));
/// assert!(user.contains("Raw Transcript: vee one is the"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    examiner_role: String,
    domain: String,
    mishearing_example: Option<String>,
}

impl PromptBuilder {
    pub fn new(examiner_role: &str, domain: &str) -> Self {
        Self {
            examiner_role: examiner_role.to_string(),
            domain: domain.to_string(),
            mishearing_example: None,
        }
    }

    pub fn from_config(exam: &ExamConfig) -> Self {
        let example = exam.mishearing_example.trim();
        Self {
            examiner_role: exam.examiner_role.clone(),
            domain: exam.domain.clone(),
            mishearing_example: (!example.is_empty()).then(|| example.to_string()),
        }
    }

    pub fn system_message(&self) -> String {
        format!(
            "You are a {}. Return output ONLY in JSON format.",
            self.examiner_role
        )
    }

    /// Build a **(system_msg, user_msg)** pair.
    pub fn build_chat(
        &self,
        question: &str,
        official_answer: &str,
        transcript: &str,
    ) -> (String, String) {
        let mut user_msg = String::with_capacity(1024);

        user_msg.push_str(
            "The candidate's answer comes from a basic Speech-to-Text engine and contains errors",
        );
        match &self.mishearing_example {
            Some(example) => user_msg.push_str(&format!(" (e.g., {example}).\n\n")),
            None => user_msg.push_str(".\n\n"),
        }

        user_msg.push_str(&format!("Question: {question}\n"));
        user_msg.push_str(&format!("Correct Answer Ref: {official_answer}\n"));
        user_msg.push_str(&format!("Raw Transcript: {transcript}\n\n"));

        user_msg.push_str("TASK:\n");
        user_msg.push_str(&format!(
            "1. Fix {} terminology using the question and reference answer as context (Context Repair).\n",
            self.domain
        ));
        user_msg.push_str(
            "2. Evaluate the corrected answer (0-10) for knowledge, English and sufficiency.\n\n",
        );

        user_msg.push_str("JSON SCHEMA:\n");
        user_msg.push_str(RESPONSE_SCHEMA);
        user_msg.push('\n');

        (self.system_message(), user_msg)
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::from_config(&ExamConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_message_sets_persona_and_json_only() {
        let builder = PromptBuilder::new("Senior Flight Examiner", "aviation");
        let (system, _) = builder.build_chat("q", "a", "t");

        assert_eq!(
            system,
            "You are a Senior Flight Examiner. Return output ONLY in JSON format."
        );
    }

    #[test]
    fn user_message_embeds_all_three_inputs() {
        let builder = PromptBuilder::default();
        let (_, user) = builder.build_chat(
            "What does TO/GA stand for?",
            "Take-off / go-around.",
            "tyga means take off go around",
        );

        assert!(user.contains("Question: What does TO/GA stand for?"));
        assert!(user.contains("Correct Answer Ref: Take-off / go-around."));
        assert!(user.contains("Raw Transcript: tyga means take off go around"));
    }

    #[test]
    fn user_message_states_task_and_schema() {
        let (_, user) = PromptBuilder::default().build_chat("q", "a", "t");

        assert!(user.contains("Fix aviation terminology"));
        assert!(user.contains("(0-10)"));
        assert!(user.contains("JSON SCHEMA:"));
        for key in [
            "corrected_text",
            "score_knowledge",
            "score_english",
            "score_sufficiency",
            "summary",
            "feedback",
        ] {
            assert!(user.contains(key), "schema must list {key}");
        }
    }

    #[test]
    fn default_builder_quotes_aviation_mishearing() {
        let (_, user) = PromptBuilder::default().build_chat("q", "a", "t");
        assert!(user.contains("\"Tyga\" instead of \"TO/GA\""));
    }

    #[test]
    fn blank_example_in_config_is_omitted() {
        let exam = ExamConfig {
            examiner_role: "Chief Engineer".into(),
            domain: "marine engineering".into(),
            mishearing_example: "  ".into(),
        };
        let (system, user) = PromptBuilder::from_config(&exam).build_chat("q", "a", "t");

        assert!(system.contains("Chief Engineer"));
        assert!(user.contains("Fix marine engineering terminology"));
        assert!(!user.contains("(e.g.,"));
    }
}
