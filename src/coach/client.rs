//! Chat Model Client
//!
//! HTTP client for any OpenAI-compatible chat completions API.

use crate::config::CoachConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chat model abstraction
///
/// One-shot completion with an explicit system prompt. The engine and
/// the chat route work against this trait so tests can script replies.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_message: &str)
        -> Result<String, CoachError>;
}

/// Client for OpenAI-compatible chat completions endpoints
pub struct OpenAiChatModel {
    client: Client,
    config: CoachConfig,
    api_key: String,
}

impl OpenAiChatModel {
    /// Create a new client from coach configuration
    pub fn new(config: CoachConfig, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            api_key,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, CoachError> {
        let body = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                CompletionMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                CompletionMessage {
                    role: "user".to_string(),
                    content: user_message.to_string(),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CoachError::Timeout
                } else if e.is_connect() {
                    CoachError::Unavailable
                } else {
                    CoachError::Request(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(CoachError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let completion: CompletionResponse =
            response.json().await.map_err(CoachError::Request)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CoachError::InvalidResponse("completion has no choices".to_string()))
    }
}

// ============================================
// Request/Response DTOs
// ============================================

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<CompletionMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct CompletionMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

// ============================================
// Errors
// ============================================

/// Errors from the chat model client
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Chat model unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Malformed model response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Scripted chat model for unit tests
    ///
    /// Replies with a fixed string, or times out when none is set.
    pub struct ScriptedChatModel {
        reply: Option<String>,
    }

    impl ScriptedChatModel {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
            }
        }

        pub fn failing() -> Self {
            Self { reply: None }
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedChatModel {
        async fn complete(
            &self,
            _system_prompt: &str,
            _user_message: &str,
        ) -> Result<String, CoachError> {
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(CoachError::Timeout),
            }
        }
    }
}
