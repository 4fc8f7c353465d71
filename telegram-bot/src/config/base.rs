//! Base config: Telegram connection, logging, restart policy, keep-alive. Loaded from env.

use anyhow::{Context, Result};
use std::env;

/// Base config: everything except the completion API.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// Fixed delay (sec) between a failed attempt and the next one
    pub restart_delay_secs: u64,
    /// Port for the keep-alive HTTP endpoint; not started when unset
    pub keepalive_port: Option<u16>,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/coc-helper-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let restart_delay_secs = match env::var("RESTART_DELAY_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("RESTART_DELAY_SECS is not a number: {}", s))?,
            Err(_) => 10,
        };
        let keepalive_port = match env::var("KEEPALIVE_PORT") {
            Ok(s) if !s.trim().is_empty() => Some(
                s.trim()
                    .parse()
                    .with_context(|| format!("KEEPALIVE_PORT is not a valid port: {}", s))?,
            ),
            _ => None,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            restart_delay_secs,
            keepalive_port,
        })
    }

    /// Validate config (token non-empty, telegram_api_url must be valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
