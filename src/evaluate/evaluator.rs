//! Answer evaluator — prompt the LLM, parse its verdict, never fail.
//!
//! [`AnswerEvaluator::evaluate`] always yields an [`Evaluation`]:
//!
//! ```text
//! transcript < MIN_TRANSCRIPT_CHARS  ─▶ Evaluation::no_speech()   (no LLM call)
//! otherwise ─▶ PromptBuilder::build_chat ─▶ LlmClient::complete_json
//!               ├─ Ok + matches schema ─▶ reply, forwarded as-is
//!               └─ any error           ─▶ Evaluation::fallback(transcript)
//! ```

use std::sync::Arc;

use crate::llm::{LlmClient, LlmError, PromptBuilder};

use super::evaluation::{Evaluation, EvaluationRequest};

/// Trimmed transcripts with fewer characters than this are treated as
/// silence.
pub const MIN_TRANSCRIPT_CHARS: usize = 2;

/// `true` when `transcript` is too short to be worth grading.
pub fn is_no_speech(transcript: &str) -> bool {
    transcript.trim().chars().count() < MIN_TRANSCRIPT_CHARS
}

// ---------------------------------------------------------------------------
// AnswerEvaluator
// ---------------------------------------------------------------------------

/// Grades transcribed answers through an [`LlmClient`].
///
/// Cheap to share: the client sits behind an `Arc` and the prompt builder is
/// immutable.
pub struct AnswerEvaluator {
    client: Arc<dyn LlmClient>,
    prompts: PromptBuilder,
}

impl AnswerEvaluator {
    pub fn new(client: Arc<dyn LlmClient>, prompts: PromptBuilder) -> Self {
        Self { client, prompts }
    }

    /// Grade `request`, substituting a fixed payload on any failure.
    ///
    /// This method **never** returns an error.
    pub async fn evaluate(&self, request: &EvaluationRequest) -> Evaluation {
        log::info!("Raw transcript: {}", request.user_answer);

        if is_no_speech(&request.user_answer) {
            log::info!("Transcript too short, skipping LLM call");
            return Evaluation::no_speech();
        }

        match self.try_evaluate(request).await {
            Ok(evaluation) => {
                log::info!("Corrected transcript: {}", evaluation.corrected_text);
                evaluation
            }
            Err(e) => {
                log::warn!("Evaluation failed, returning fallback: {e}");
                Evaluation::fallback(&request.user_answer)
            }
        }
    }

    /// One LLM round-trip without the fallback.
    pub async fn try_evaluate(&self, request: &EvaluationRequest) -> Result<Evaluation, LlmError> {
        let (system_msg, user_msg) = self.prompts.build_chat(
            &request.question,
            &request.official_answer,
            &request.user_answer,
        );

        let reply = self.client.complete_json(&system_msg, &user_msg).await?;

        serde_json::from_value(reply)
            .map_err(|e| LlmError::Parse(format!("reply does not match schema: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
