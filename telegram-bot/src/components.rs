//! Component factory: builds the Telegram client, completion service, reply chain and event
//! router from config. Isolates assembly logic from the runner.

use openai_client::OpenAIClient;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::completion::{CompletionService, TopicCompletion};
use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::handlers::{
    CannedReplyHandler, CompletionHandler, IntentGateHandler, LoggingHandler,
    PatternReplyHandler,
};
use crate::router::EventRouter;
use crate::telegram::TelegramBotAdapter;

/// Dependencies for one bot attempt; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot_adapter: Arc<dyn CoreBot>,
    pub completion: Arc<dyn CompletionService>,
}

/// Creates the teloxide client, pointed at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Creates the topic-scoped completion service from the completion config.
pub fn build_completion(config: &BotConfig) -> Arc<dyn CompletionService> {
    let completion = config.completion();
    let client =
        OpenAIClient::with_endpoint(completion.api_key.clone(), completion.api_url.clone());
    Arc::new(TopicCompletion::new(client, completion.model.clone()))
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> BotComponents {
    let teloxide_bot = build_teloxide_bot(config);
    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let completion = build_completion(config);

    info!(
        model = %config.completion().model,
        endpoint = %config.completion().api_url,
        custom_telegram_api = config.telegram_api_url().is_some(),
        "Bot components built"
    );

    BotComponents {
        teloxide_bot,
        bot_adapter,
        completion,
    }
}

/// Builds the reply chain: logging → intent gate → canned reply → pattern reply → completion.
/// The completion handler is last and always replies, so every addressed message gets an answer.
pub fn build_reply_chain(completion: Arc<dyn CompletionService>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler::new()))
        .add_handler(Arc::new(IntentGateHandler::new()))
        .add_handler(Arc::new(CannedReplyHandler::new()))
        .add_handler(Arc::new(PatternReplyHandler::new()))
        .add_handler(Arc::new(CompletionHandler::new(completion)))
}

/// Router over the reply chain, delivering through the components' bot.
pub fn build_event_router(components: &BotComponents) -> EventRouter {
    EventRouter::new(
        build_reply_chain(components.completion.clone()),
        components.bot_adapter.clone(),
    )
}
