//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends messages via
//! Telegram; tests substitute another Bot impl.

use crate::core::{parse_message_id, Bot as CoreBot, BotError, Chat, Message, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ReplyParameters},
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Message to quote when replying: none in private chats or when the id is not numeric.
fn quoted_message_id(message: &Message) -> Option<MessageId> {
    if message.chat.chat_type == "private" {
        return None;
    }
    parse_message_id(&message.id).ok().map(MessageId)
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    /// Quotes the original message in groups; private chats get a plain message.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let Some(id) = quoted_message_id(message) else {
            return self.send_message(&message.chat, text).await;
        };
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .reply_parameters(ReplyParameters::new(id))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
