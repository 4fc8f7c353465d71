//! Handler that stops the chain for messages not addressed to the bot.

use crate::core::{Handler, Message, Result};
use crate::intent::should_respond;
use async_trait::async_trait;
use tracing::debug;

/// before() returns [`should_respond`] for the message text.
#[derive(Clone, Default)]
pub struct IntentGateHandler;

impl IntentGateHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for IntentGateHandler {
    async fn before(&self, message: &Message) -> Result<bool> {
        let addressed = should_respond(&message.content);
        if !addressed {
            debug!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                "Message not addressed to bot, skipping"
            );
        }
        Ok(addressed)
    }
}
