//! Bot configuration: BaseConfig (Telegram, log, restart, keep-alive) + CompletionConfig.

mod base;
mod bot_config;
mod completion;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use completion::{CompletionConfig, DEFAULT_MODEL};
