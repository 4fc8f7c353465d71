//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use coc_helper_bot::{Chat, Message, User};

pub fn member(id: i64, first_name: Option<&str>) -> User {
    User {
        id,
        username: None,
        first_name: first_name.map(str::to_string),
        last_name: None,
    }
}

pub fn create_test_message(content: &str) -> Message {
    Message {
        id: "1001".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: -100456,
            chat_type: "supergroup".to_string(),
        },
        created_at: Utc::now(),
    }
}
