//! # Clash of Clans helper bot
//!
//! Telegram bot for a Clash of Clans community. Answers messages addressed to it (canned replies,
//! a fixed pattern reply, or a topic-scoped AI completion) and greets new group members.
//! Core (Bot, Handler, Message, BotEvent) is transport-agnostic; `telegram` adapts teloxide to it;
//! `supervisor` keeps the process alive.

pub mod chain;
pub mod cli;
pub mod completion;
pub mod components;
pub mod config;
pub mod core;
pub mod greeter;
pub mod handlers;
pub mod intent;
pub mod keepalive;
pub mod replies;
pub mod router;
pub mod runner;
pub mod supervisor;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, parse_message_id, Bot, BotError, BotEvent, Chat, Handler, HandlerResponse,
    Message, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use completion::{CompletionService, TopicCompletion};
pub use components::{build_bot_components, build_event_router, build_reply_chain, BotComponents};
pub use config::{BaseConfig, BotConfig, CompletionConfig};
pub use handlers::{
    CannedReplyHandler, CompletionHandler, IntentGateHandler, LoggingHandler, PatternReplyHandler,
};
pub use intent::should_respond;
pub use router::EventRouter;
pub use runner::{run_bot, run_supervised};
pub use supervisor::Supervisor;
pub use telegram::{run_dispatcher, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
