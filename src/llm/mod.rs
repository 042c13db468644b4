//! LLM boundary adapter.
//!
//! This module provides:
//! * [`LlmClient`] — async trait: system + user prompt in, JSON object out.
//! * [`ApiClient`] — HTTP implementation for every supported provider; the
//!   vendor is picked by [`LlmProvider`](crate::config::LlmProvider).
//! * [`PromptBuilder`] — builds the grading prompt.
//! * [`LlmError`] — error variants for LLM calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use exam_coach::config::AppConfig;
//! use exam_coach::llm::{ApiClient, LlmClient, PromptBuilder};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let client = ApiClient::from_env(&config.llm).expect("API key in environment");
//!
//!     let (system, user) = PromptBuilder::from_config(&config.exam).build_chat(
//!         "What is V1?",
//!         "The take-off decision speed.",
//!         "vee one is the decision speed",
//!     );
//!     let reply = client.complete_json(&system, &user).await.unwrap();
//!     println!("{}", reply["corrected_text"]);
//! }
//! ```

pub mod client;
pub mod prompt;
pub mod provider;

pub use client::{parse_json_object, ApiClient, LlmClient, LlmError};
pub use prompt::PromptBuilder;
