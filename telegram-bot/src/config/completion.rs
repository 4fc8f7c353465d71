//! Completion API config (OpenRouter or any OpenAI-compatible endpoint).

use anyhow::{Context, Result};
use openai_client::{mask_token, DEFAULT_CHAT_COMPLETIONS_URL};
use std::env;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Completion endpoint, credentials and model. Sampling parameters are not configurable.
#[derive(Clone)]
pub struct CompletionConfig {
    /// OPENROUTER_API_KEY
    pub api_key: String,
    /// OPENROUTER_URL: full chat-completions URL
    pub api_url: String,
    /// OPENROUTER_MODEL
    pub model: String,
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &mask_token(&self.api_key))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

impl CompletionConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENROUTER_API_KEY").context("OPENROUTER_API_KEY not set")?;
        let api_url = env::var("OPENROUTER_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_COMPLETIONS_URL.to_string());
        let model = env::var("OPENROUTER_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self {
            api_key,
            api_url,
            model,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("OPENROUTER_API_KEY is empty");
        }
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("OPENROUTER_URL is not a valid URL: {}", self.api_url);
        }
        Ok(())
    }
}
