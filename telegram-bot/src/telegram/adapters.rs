//! Converts teloxide updates into core types and [`BotEvent`]s.

use crate::core::{BotEvent, Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Telegram user → core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram message → core [`Message`] / [`BotEvent`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            content: self.0.text().unwrap_or("").to_string(),
            created_at: self.0.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_group() {
            "group"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }

    /// Classifies the message: joined members → `MembersJoined`; text that is not a `/command`
    /// → `Text`; anything else (stickers, photos, commands, empty joins) → `None`.
    pub fn to_event(&self) -> Option<BotEvent> {
        if let Some(members) = self.0.new_chat_members() {
            if members.is_empty() {
                return None;
            }
            return Some(BotEvent::MembersJoined {
                message: self.to_core(),
                members: members
                    .iter()
                    .map(|u| TelegramUserWrapper(u).to_core())
                    .collect(),
            });
        }

        match self.0.text() {
            Some(text) if !text.starts_with('/') => Some(BotEvent::Text(self.to_core())),
            _ => None,
        }
    }
}
