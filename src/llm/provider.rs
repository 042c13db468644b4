//! Vendor-specific request shaping.
//!
//! Everything that differs between providers lives here: the endpoint path,
//! the request body, how the key is attached, and where the generated text
//! sits in the reply. [`ApiClient`](super::ApiClient) stays vendor-agnostic.

use serde_json::{json, Value};

use crate::config::{LlmConfig, LlmProvider};

/// Full URL of the generation endpoint for `config`.
pub fn endpoint(config: &LlmConfig) -> String {
    let base = config.base_url.trim_end_matches('/');
    match config.provider {
        LlmProvider::OpenAiCompatible => format!("{base}/v1/chat/completions"),
        LlmProvider::Gemini => format!("{base}/v1beta/models/{}:generateContent", config.model),
    }
}

/// JSON request body asking for a JSON-only reply.
pub fn request_body(config: &LlmConfig, system_msg: &str, user_msg: &str) -> Value {
    match config.provider {
        LlmProvider::OpenAiCompatible => json!({
            "model": config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream": false,
            "temperature": config.temperature,
            "response_format": { "type": "json_object" }
        }),
        LlmProvider::Gemini => json!({
            "systemInstruction": { "parts": [ { "text": system_msg } ] },
            "contents": [
                { "role": "user", "parts": [ { "text": user_msg } ] }
            ],
            "generationConfig": {
                "temperature": config.temperature,
                "responseMimeType": "application/json"
            }
        }),
    }
}

/// Attach the API key the way `provider` expects it.
pub fn authorize(
    provider: LlmProvider,
    req: reqwest::RequestBuilder,
    api_key: &str,
) -> reqwest::RequestBuilder {
    match provider {
        LlmProvider::OpenAiCompatible => req.bearer_auth(api_key),
        LlmProvider::Gemini => req.header("x-goog-api-key", api_key),
    }
}

/// Generated text inside a provider reply, if present.
pub fn extract_content(provider: LlmProvider, reply: &Value) -> Option<&str> {
    match provider {
        LlmProvider::OpenAiCompatible => reply["choices"][0]["message"]["content"].as_str(),
        LlmProvider::Gemini => reply["candidates"][0]["content"]["parts"][0]["text"].as_str(),
    }
}
