//! Answer evaluation.
//!
//! * [`EvaluationRequest`] / [`Evaluation`] — `POST /api/evaluate` payloads.
//! * [`AnswerEvaluator`] — grades a transcript through an
//!   [`LlmClient`](crate::llm::LlmClient), with the no-speech short-circuit and
//!   the zero-score fallback.

pub mod evaluation;
pub mod evaluator;

pub use evaluation::{Evaluation, EvaluationRequest};
pub use evaluator::{is_no_speech, AnswerEvaluator, MIN_TRANSCRIPT_CHARS};
