//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for each concern,
//! `AppPaths` for locating `settings.toml`, TOML persistence, and the
//! `EXAM_COACH_*` environment overrides.

pub mod paths;
pub mod settings;

pub use paths::{AppPaths, CONFIG_PATH_ENV};
pub use settings::{
    AppConfig, ConfigError, ExamConfig, LlmConfig, LlmProvider, QuestionsConfig, ServerConfig,
    HOST_ENV, PORT_ENV, QUESTIONS_ENV,
};
