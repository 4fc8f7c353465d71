//! Dispatcher runner: turns teloxide updates into [`crate::core::BotEvent`]s and hands them to the
//! [`EventRouter`].

use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use crate::core::BotEvent;
use crate::router::EventRouter;

async fn on_event(event: BotEvent, router: Arc<EventRouter>) -> ResponseResult<()> {
    let message = event.message();
    info!(
        kind = event.kind(),
        user_id = message.user.id,
        chat_id = message.chat.id,
        "Received event"
    );
    if let Err(e) = router.route(&event).await {
        error!(error = %e, chat_id = message.chat.id, "Event handling failed");
    }
    Ok(())
}

/// Checks the token with `getMe`, then dispatches updates until Ctrl-C.
///
/// Only plain text messages and member joins are handled; other updates are dropped at debug
/// level. Updates from one chat are handled in order; different chats run concurrently.
#[instrument(skip(bot, router))]
pub async fn run_dispatcher(bot: teloxide::Bot, router: Arc<EventRouter>) -> Result<()> {
    let me = bot
        .get_me()
        .await
        .context("getMe failed; check BOT_TOKEN and network")?;
    info!(username = ?me.user.username, "Bot identity confirmed");

    let handler = Update::filter_message()
        .filter_map(|msg: Message| TelegramMessageWrapper(&msg).to_event())
        .endpoint(on_event);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}
