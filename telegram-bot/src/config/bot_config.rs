//! BotConfig: BaseConfig + CompletionConfig. Use load() for env-based loading.

use anyhow::Result;
use std::time::Duration;

use super::{BaseConfig, CompletionConfig};

/// Bot config. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub completion: CompletionConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let completion = CompletionConfig::from_env()?;
        Ok(Self { base, completion })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.completion.validate()
    }

    pub fn completion(&self) -> &CompletionConfig {
        &self.completion
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn restart_delay(&self) -> Duration {
        Duration::from_secs(self.base.restart_delay_secs)
    }
    pub fn keepalive_port(&self) -> Option<u16> {
        self.base.keepalive_port
    }
}
