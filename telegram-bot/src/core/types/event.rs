//! Event-kind tag for everything the bot reacts to.

use super::{message::Message, user::User};

/// Inbound event, already stripped of transport details.
#[derive(Debug, Clone)]
pub enum BotEvent {
    /// Plain text message (commands are not delivered here).
    Text(Message),
    /// Members joined the chat. `message` is the service message announcing them; `members` keeps
    /// the transport's order.
    MembersJoined {
        message: Message,
        members: Vec<User>,
    },
}

impl BotEvent {
    /// The message the event arrived with; replies go to its chat.
    pub fn message(&self) -> &Message {
        match self {
            BotEvent::Text(message) => message,
            BotEvent::MembersJoined { message, .. } => message,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            BotEvent::Text(_) => "text",
            BotEvent::MembersJoined { .. } => "members_joined",
        }
    }
}
