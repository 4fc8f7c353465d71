//! Event router: picks the decision logic by event kind and delivers the resulting replies.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::chain::HandlerChain;
use crate::core::{Bot, BotEvent, HandlerResponse, Message, Result};
use crate::greeter::greetings;

/// Text events go through the reply chain; member-join events go to the greeter. Replies are
/// sent through `bot`, quoting the message the event arrived with.
#[derive(Clone)]
pub struct EventRouter {
    chain: HandlerChain,
    bot: Arc<dyn Bot>,
}

impl EventRouter {
    pub fn new(chain: HandlerChain, bot: Arc<dyn Bot>) -> Self {
        Self { chain, bot }
    }

    /// Replies `event` should produce, in send order. Empty when the bot stays silent.
    /// Handler-chain errors are returned as-is.
    pub async fn replies_for(&self, event: &BotEvent) -> Result<Vec<String>> {
        match event {
            BotEvent::Text(message) => match self.chain.handle(message).await? {
                HandlerResponse::Reply(text) => Ok(vec![text]),
                HandlerResponse::Continue | HandlerResponse::Stop => Ok(Vec::new()),
            },
            BotEvent::MembersJoined { members, .. } => Ok(greetings(members)),
        }
    }

    /// Computes the replies for `event` and sends each one. Returns how many were delivered.
    ///
    /// A failed send is logged and not retried; later replies are still attempted.
    #[instrument(skip(self, event), fields(kind = event.kind(), chat_id = event.message().chat.id))]
    pub async fn route(&self, event: &BotEvent) -> Result<usize> {
        let replies = self.replies_for(event).await?;
        let origin = event.message();

        let mut delivered = 0;
        for text in &replies {
            if self.deliver(origin, text).await {
                delivered += 1;
            }
        }

        if !replies.is_empty() {
            info!(
                user_id = origin.user.id,
                replies = replies.len(),
                delivered,
                "Replies sent"
            );
        }
        Ok(delivered)
    }

    async fn deliver(&self, origin: &Message, text: &str) -> bool {
        match self.bot.reply_to(origin, text).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    error = %e,
                    chat_id = origin.chat.id,
                    message_id = %origin.id,
                    "Failed to send reply"
                );
                false
            }
        }
    }
}
