//! Handler for exact-match canned replies.

use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::replies::canned_reply;
use async_trait::async_trait;
use tracing::info;

/// Replies from the canned table on an exact (lower-cased, trimmed) match; otherwise continues.
#[derive(Clone, Default)]
pub struct CannedReplyHandler;

impl CannedReplyHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for CannedReplyHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        Ok(match canned_reply(&message.content) {
            Some(reply) => {
                info!(user_id = message.user.id, "step: canned reply matched");
                HandlerResponse::Reply(reply.to_string())
            }
            None => HandlerResponse::Continue,
        })
    }
}
