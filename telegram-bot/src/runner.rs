//! Bot lifecycle: one attempt (`run_bot`) and the supervised process (`run_supervised`).

use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::components::{build_bot_components, build_event_router};
use crate::config::BotConfig;
use crate::keepalive;
use crate::supervisor::Supervisor;
use crate::telegram::run_dispatcher;

/// One attempt: fresh Telegram and completion clients, then dispatch until shutdown.
/// Returns `Ok(())` on graceful shutdown; startup and polling failures are errors.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let components = build_bot_components(&config);
    let router = Arc::new(build_event_router(&components));

    info!("Bot started successfully");

    run_dispatcher(components.teloxide_bot, router).await
}

fn spawn_keepalive(port: u16) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = keepalive::serve(port).await {
            error!(error = %e, port, "Keep-alive endpoint failed");
        }
    })
}

/// Runs the bot under the [`Supervisor`] until a graceful shutdown. The keep-alive endpoint, when
/// configured, lives for the whole process rather than one attempt.
#[instrument(skip(config))]
pub async fn run_supervised(config: BotConfig) -> Result<()> {
    let keepalive = config.keepalive_port().map(spawn_keepalive);

    let supervisor = Supervisor::new(config.restart_delay());
    let attempts = supervisor
        .run(|_| run_bot(config.clone()))
        .await;
    info!(attempts, "Bot shut down");

    if let Some(handle) = keepalive {
        handle.abort();
    }
    Ok(())
}
