//! Application settings structs, defaults, TOML persistence and environment
//! overrides.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.
//! Every section is `#[serde(default)]`, so a settings file only needs the
//! keys it wants to change.
//!
//! The upstream API key is deliberately *not* part of [`AppConfig`]: it is
//! read from the environment variable named by [`LlmConfig::api_key_env`]
//! and the server refuses to start without it.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AppPaths;

/// Overrides `server.host`.
pub const HOST_ENV: &str = "EXAM_COACH_HOST";
/// Overrides `server.port`.
pub const PORT_ENV: &str = "EXAM_COACH_PORT";
/// Overrides `questions.csv_path`.
pub const QUESTIONS_ENV: &str = "EXAM_COACH_QUESTIONS";

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Misconfiguration detected while resolving settings at startup.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The environment variable that should hold the API key is unset or blank.
    #[error("environment variable {var} must be set to the LLM provider API key")]
    MissingApiKey { var: String },

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {var}")]
    InvalidOverride { var: String, value: String },
}

// ---------------------------------------------------------------------------
// LlmProvider
// ---------------------------------------------------------------------------

/// Wire format spoken by the generative-text service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
    /// Any OpenAI-compatible `/v1/chat/completions` API (Groq, OpenAI,
    /// Together.ai, Ollama in OpenAI mode, ...).
    OpenAiCompatible,
    /// Google Gemini `generateContent`.
    Gemini,
}

impl Default for LlmProvider {
    fn default() -> Self {
        Self::OpenAiCompatible
    }
}

// ---------------------------------------------------------------------------
// LlmConfig
// ---------------------------------------------------------------------------

/// Settings for the upstream generative-text service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Which request/response shape to use.
    pub provider: LlmProvider,
    /// Base URL of the API endpoint.
    ///
    /// - Groq: `https://api.groq.com/openai`
    /// - OpenAI: `https://api.openai.com`
    /// - Gemini: `https://generativelanguage.googleapis.com`
    pub base_url: String,
    /// Model identifier sent to the API.
    pub model: String,
    /// Sampling temperature. Grading wants determinism, so the default is 0.
    pub temperature: f32,
    /// Name of the environment variable that holds the API key.
    pub api_key_env: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            base_url: "https://api.groq.com/openai".into(),
            model: "llama3-70b-8192".into(),
            temperature: 0.0,
            api_key_env: "GROQ_API_KEY".into(),
        }
    }
}

impl LlmConfig {
    /// Read the API key from the process environment.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        self.api_key_from(|var| std::env::var(var).ok())
    }

    /// Read the API key through `lookup` (the environment in production).
    ///
    /// Blank values count as missing.
    pub fn api_key_from<F>(&self, lookup: F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(&self.api_key_env) {
            Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
            _ => Err(ConfigError::MissingApiKey {
                var: self.api_key_env.clone(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

/// Listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// HTML page served at `GET /`.
    pub index_page: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            index_page: PathBuf::from("templates/index.html"),
        }
    }
}

// ---------------------------------------------------------------------------
// QuestionsConfig
// ---------------------------------------------------------------------------

/// Where the question bank lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionsConfig {
    /// CSV file re-read on every `GET /api/question`.
    pub csv_path: PathBuf,
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("question_bank.csv"),
        }
    }
}

// ---------------------------------------------------------------------------
// ExamConfig
// ---------------------------------------------------------------------------

/// Persona and subject matter woven into the grading prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamConfig {
    /// Who the model should act as, e.g. `"Senior Flight Examiner"`.
    pub examiner_role: String,
    /// Subject whose terminology the transcript is repaired against.
    pub domain: String,
    /// A typical mishearing shown to the model, e.g.
    /// `"Tyga" instead of "TO/GA"`.
    pub mishearing_example: String,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            examiner_role: "Senior Flight Examiner".into(),
            domain: "aviation".into(),
            mishearing_example: "\"Tyga\" instead of \"TO/GA\"".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use exam_coach::config::AppConfig;
///
/// // Missing file -> defaults; env overrides applied on top.
/// let config = AppConfig::load().unwrap();
/// let api_key = config.llm.resolve_api_key();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub questions: QuestionsConfig,
    pub llm: LlmConfig,
    pub exam: ExamConfig,
}

impl AppConfig {
    /// Load the settings file resolved by [`AppPaths`], then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&AppPaths::new().settings_file)?;
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply `EXAM_COACH_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV).filter(|v| !v.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_ENV).filter(|v| !v.trim().is_empty()) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidOverride {
                var: PORT_ENV.into(),
                value: port.clone(),
            })?;
        }
        if let Some(csv) = lookup(QUESTIONS_ENV).filter(|v| !v.trim().is_empty()) {
            self.questions.csv_path = PathBuf::from(csv.trim());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
