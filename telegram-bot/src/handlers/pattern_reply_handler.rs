//! Handler for the "I think otherwise" substring reply.

use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::replies::pattern_reply;
use async_trait::async_trait;
use tracing::info;

#[derive(Clone, Default)]
pub struct PatternReplyHandler;

impl PatternReplyHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for PatternReplyHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        Ok(match pattern_reply(&message.content) {
            Some(reply) => {
                info!(user_id = message.user.id, "step: pattern reply matched");
                HandlerResponse::Reply(reply.to_string())
            }
            None => HandlerResponse::Continue,
        })
    }
}
