//! # Prompt
//!
//! Chat message model and the topic-scoped prompt sent to the completion API.
//!
//! ## Format
//!
//! Every completion request carries exactly two messages:
//!
//! - **System**: [`TOPIC_SYSTEM_PROMPT`], restricting the assistant to Clash of Clans.
//! - **User**: the raw text of the group message, unmodified.
//!
//! ## External interactions
//!
//! - **AI models**: serialized into the `messages` array of an OpenAI-compatible
//!   `/chat/completions` request (OpenRouter).

use serde::{Deserialize, Serialize};

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of the OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Fixed system instruction: the assistant is a Clash of Clans expert and answers only on that topic.
pub const TOPIC_SYSTEM_PROMPT: &str = "Ти експерт з гри Clash of Clans. Відповідай лише на запитання або теми, пов'язані з Clash of Clans.";

/// Builds the two-message prompt: `system_message` followed by the user's raw text.
///
/// The user text is passed through as-is (no trimming or case folding); the model sees
/// exactly what was typed in the chat.
pub fn topic_prompt(system_message: &str, user_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_message),
        ChatMessage::user(user_text),
    ]
}

/// [`topic_prompt`] with [`TOPIC_SYSTEM_PROMPT`].
pub fn default_topic_prompt(user_text: &str) -> Vec<ChatMessage> {
    topic_prompt(TOPIC_SYSTEM_PROMPT, user_text)
}
