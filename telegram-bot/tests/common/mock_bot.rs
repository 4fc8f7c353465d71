//! Mock implementation of [`coc_helper_bot::Bot`] for integration tests.
//!
//! Records every `send_message` / `reply_to` call so tests can assert on outbound text without
//! hitting Telegram. Individual sends can be made to fail.

use async_trait::async_trait;
use coc_helper_bot::{Bot, BotError, Chat, Message, Result};
use std::collections::HashSet;
use std::sync::Mutex;

/// One recorded outbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRecord {
    pub chat_id: i64,
    /// Id of the quoted message; `None` for plain sends.
    pub reply_to: Option<String>,
    pub text: String,
}

/// Mock Bot that records sends. Calls whose 1-based index is in `fail_on` return an error and
/// are not recorded.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    calls: Mutex<usize>,
    fail_on: HashSet<usize>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// MockBot whose `n`-th send calls (1-based) fail.
    pub fn failing_on(calls: impl IntoIterator<Item = usize>) -> Self {
        Self {
            fail_on: calls.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.text).collect()
    }

    fn record(&self, chat_id: i64, reply_to: Option<String>, text: &str) -> Result<()> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            *calls
        };
        if self.fail_on.contains(&call) {
            return Err(BotError::Bot(format!("simulated send failure #{}", call)));
        }
        self.sent.lock().unwrap().push(SentRecord {
            chat_id,
            reply_to,
            text: text.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat.id, None, text)
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(message.chat.id, Some(message.id.clone()), text)
    }
}
