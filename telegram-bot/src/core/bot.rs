//! Outbound side of the transport.
//!
//! [`Bot`] is what the event router talks to; the Telegram adapter implements it over teloxide and
//! tests substitute a recording mock.

use async_trait::async_trait;

use crate::core::error::{BotError, Result};
use crate::core::types::{Chat, Message};

/// Sends text back to a conversation. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message in the same chat, quoting it when the transport can.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
}

/// Parses a transport message id (Telegram numeric string) into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Bot(format!("Invalid message_id: {}", s)))
}
