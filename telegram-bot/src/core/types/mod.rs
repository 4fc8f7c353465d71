//! Core types: user, chat, message, event, handler response, and the Handler trait.
//!
//! One file per main type.

mod chat;
mod event;
mod handler;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use event::BotEvent;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use response::HandlerResponse;
pub use user::User;
