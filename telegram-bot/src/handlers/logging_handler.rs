//! Handler that logs each message entering the chain and the response it produced.

use crate::core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Logs in before() and after(); never changes the outcome.
#[derive(Clone, Default)]
pub struct LoggingHandler;

impl LoggingHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        debug!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            content = %message.content,
            "step: LoggingHandler before"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                reply_len = text.chars().count(),
                "Reply ready"
            ),
            other => debug!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                response = ?other,
                "No reply"
            ),
        }
        Ok(())
    }
}
