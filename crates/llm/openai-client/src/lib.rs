//! # OpenAI-compatible chat completion client
//!
//! Thin wrapper around [reqwest] for a single, non-streaming `/chat/completions` call.
//! Used against OpenRouter, but any OpenAI-compatible endpoint works.
//! Provides token masking for safe logging and a typed error for every way a call can fail.

use prompt::ChatMessage;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default endpoint (OpenRouter chat completions).
pub const DEFAULT_CHAT_COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
/// Exposed for tests and for callers who need to log API keys safely.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Everything that can go wrong with one completion call.
///
/// Callers are expected to treat all variants the same way (log and fall back); the split
/// exists so logs say which step failed.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Completion response has no choices")]
    EmptyChoices,

    #[error("First choice has no message content")]
    MissingContent,
}

/// Fixed sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
            top_p: 1.0,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

/// Upper bound for one completion request (connect + send + full response body).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat completion client: one shared HTTP client, bearer key, endpoint URL, request timeout.
#[derive(Clone)]
pub struct OpenAIClient {
    http: Client,
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("api_key", &mask_token(&self.api_key))
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenAIClient {
    /// Builds a client for [`DEFAULT_CHAT_COMPLETIONS_URL`].
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_CHAT_COMPLETIONS_URL.to_string())
    }

    /// Builds a client with a custom endpoint URL (e.g. a proxy or a mock server).
    /// `endpoint` is the full `/chat/completions` URL, not a base URL.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            endpoint,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Replaces [`DEFAULT_REQUEST_TIMEOUT`]. A request that runs longer fails with
    /// [`CompletionError::Http`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends a chat completion request and returns the first choice's content verbatim.
    ///
    /// Any non-2xx status, unparseable body, empty `choices`, missing `message.content` or a
    /// request outliving the timeout is an error. No retries.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        params: &SamplingParams,
    ) -> Result<String, CompletionError> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key),
            endpoint = %self.endpoint,
            "chat_completion request"
        );

        let request = ChatCompletionRequest {
            model,
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
        };

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "chat_completion request JSON");
        }

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CompletionError::Status { status, body });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;

        if let Some(ref u) = parsed.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        parsed
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyChoices)?
            .message
            .content
            .ok_or(CompletionError::MissingContent)
    }
}
