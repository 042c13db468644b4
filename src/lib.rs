//! Oral-exam practice server.
//!
//! Hands out random questions from a CSV question bank and grades spoken
//! (already transcribed) answers through a generative-text API.
//!
//! * [`config`] — settings file, environment overrides, API key resolution.
//! * [`questions`] — the question bank.
//! * [`llm`] — prompt building and the LLM client.
//! * [`evaluate`] — answer grading with its fallbacks.
//! * [`server`] — axum router and handlers.

pub mod config;
pub mod evaluate;
pub mod llm;
pub mod questions;
pub mod server;
