//! Incoming message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single incoming message: sender, chat, raw text.
///
/// `content` is the raw UTF-8 text as typed (possibly empty); matching code folds case itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Transport message id (Telegram numeric id as string); used to quote the message in replies.
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
