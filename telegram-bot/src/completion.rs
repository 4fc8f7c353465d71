//! Completion service: the seam between the reply chain and the external chat-completion API.

use async_trait::async_trait;
use openai_client::{CompletionError, OpenAIClient, SamplingParams};
use prompt::default_topic_prompt;
use tracing::instrument;

/// Answers one user message. One call, one request; no retries, no caching.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, user_text: &str) -> Result<String, CompletionError>;
}

/// Production [`CompletionService`]: topic system prompt + raw user text, fixed sampling
/// parameters, sent through [`OpenAIClient`].
#[derive(Debug, Clone)]
pub struct TopicCompletion {
    client: OpenAIClient,
    model: String,
    params: SamplingParams,
}

impl TopicCompletion {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            params: SamplingParams::default(),
        }
    }
}

#[async_trait]
impl CompletionService for TopicCompletion {
    #[instrument(skip(self, user_text), fields(model = %self.model))]
    async fn complete(&self, user_text: &str) -> Result<String, CompletionError> {
        let messages = default_topic_prompt(user_text);
        self.client
            .chat_completion(&self.model, &messages, &self.params)
            .await
    }
}
