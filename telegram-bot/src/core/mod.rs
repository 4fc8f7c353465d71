//! Core types and traits: Bot, Handler, Message, BotEvent, HandlerResponse, error, logger.
//! Transport-agnostic; nothing here depends on teloxide.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{
    BotEvent, Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};
