//! Terminal handler: asks the completion service and always produces a reply.

use std::sync::Arc;

use crate::completion::CompletionService;
use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::replies::APOLOGY_REPLY;
use async_trait::async_trait;
use tracing::{error, info, instrument};

/// Relays the completion verbatim; on any completion failure logs the cause and replies with
/// [`APOLOGY_REPLY`]. Never returns an error and never retries.
#[derive(Clone)]
pub struct CompletionHandler {
    service: Arc<dyn CompletionService>,
}

impl CompletionHandler {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Handler for CompletionHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "step: requesting completion"
        );
        let reply = match self.service.complete(&message.content).await {
            Ok(text) => text,
            Err(e) => {
                error!(
                    error = %e,
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    "Completion API error"
                );
                APOLOGY_REPLY.to_string()
            }
        };
        Ok(HandlerResponse::Reply(reply))
    }
}
