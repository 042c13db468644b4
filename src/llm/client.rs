//! Core `LlmClient` trait and `ApiClient` implementation.
//!
//! `ApiClient` calls the configured generative-text service and returns its
//! JSON-mode reply as a parsed mapping. Connection details come from
//! [`LlmConfig`]; the key comes from the caller (read from the environment
//! at startup). Nothing is hardcoded.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ConfigError, LlmConfig};
use crate::llm::provider;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur while asking the LLM for a JSON reply.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("LLM service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The reply (or the generated text inside it) was not the expected JSON.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),

    /// The reply carried no generated text.
    #[error("LLM returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Request(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// LlmClient trait
// ---------------------------------------------------------------------------

/// Prompt in, JSON object out.
///
/// Implementors must be `Send + Sync` so they can be shared across request
/// handlers as `Arc<dyn LlmClient>`.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete_json(&self, system_msg: &str, user_msg: &str) -> Result<Value, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// HTTP client for the provider selected in [`LlmConfig::provider`].
///
/// No retry, backoff or custom timeout: a failed call is reported once and
/// the caller decides what to do with it.
pub struct ApiClient {
    client: reqwest::Client,
    config: LlmConfig,
    api_key: String,
}

impl ApiClient {
    pub fn new(config: &LlmConfig, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
            api_key: api_key.into(),
        }
    }

    /// Build a client whose key comes from `config.api_key_env`.
    ///
    /// Fails when the variable is unset or blank.
    pub fn from_env(config: &LlmConfig) -> Result<Self, ConfigError> {
        let api_key = config.resolve_api_key()?;
        Ok(Self::new(config, api_key))
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

#[async_trait]
impl LlmClient for ApiClient {
    async fn complete_json(&self, system_msg: &str, user_msg: &str) -> Result<Value, LlmError> {
        let url = provider::endpoint(&self.config);
        let body = provider::request_body(&self.config, system_msg, user_msg);

        let req = self.client.post(&url).json(&body);
        let req = provider::authorize(self.config.provider, req, &self.api_key);

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let content = provider::extract_content(self.config.provider, &reply)
            .ok_or(LlmError::EmptyResponse)?;

        parse_json_object(content)
    }
}

/// Parse generated text as a JSON object.
///
/// JSON mode normally yields bare JSON, but a surrounding Markdown code
/// fence is tolerated.
pub fn parse_json_object(content: &str) -> Result<Value, LlmError> {
    let trimmed = strip_code_fence(content.trim());
    if trimmed.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| LlmError::Parse(e.to_string()))?;

    if value.is_object() {
        Ok(value)
    } else {
        Err(LlmError::Parse("expected a JSON object".into()))
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // Drop an optional language tag, with or without a newline after it.
    let body_start = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    rest[body_start..].trim()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
