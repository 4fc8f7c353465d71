//! Integration tests for [`coc_helper_bot::EventRouter`] over the production reply chain.
//!
//! The completion service is a scripted stub and the bot is a recording [`MockBot`], so these
//! tests exercise intent gating, canned and pattern replies, the completion fallback and its
//! apology, and member greetings without any network.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coc_helper_bot::greeter::NEWCOMER_PLACEHOLDER;
use coc_helper_bot::replies::{APOLOGY_REPLY, DISAGREEMENT_REPLY};
use coc_helper_bot::{build_reply_chain, BotEvent, CompletionService, EventRouter};
use common::mock_bot::MockBot;
use common::{create_test_message, member};
use openai_client::CompletionError;

/// Completion stub: returns `reply` (or fails when `None`) and records every prompt.
struct StubCompletion {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    fn answering(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, user_text: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(user_text.to_string());
        self.reply.clone().ok_or(CompletionError::EmptyChoices)
    }
}

fn router_with(completion: Arc<StubCompletion>, bot: Arc<MockBot>) -> EventRouter {
    EventRouter::new(build_reply_chain(completion), bot)
}

fn text_event(content: &str) -> BotEvent {
    BotEvent::Text(create_test_message(content))
}

/// **Test: Exact canned phrase is answered from the table, quoting the message.**
///
/// **Setup:** Completion stub that would answer "AI".
/// **Action:** route "Привіт Бот ".
/// **Expected:** one send with the canned greeting, quoting message 1001; completion not called.
#[tokio::test]
async fn test_canned_reply_skips_completion() {
    let completion = StubCompletion::answering("AI");
    let bot = Arc::new(MockBot::new());
    let router = router_with(completion.clone(), bot.clone());

    let delivered = router.route(&text_event("Привіт Бот ")).await.unwrap();

    assert_eq!(delivered, 1);
    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, "Привіт! Чим можу допомогти з Clash of Clans?");
    assert_eq!(sent[0].reply_to.as_deref(), Some("1001"));
    assert_eq!(sent[0].chat_id, -100456);
    assert_eq!(completion.calls(), 0);
}

/// **Test: Punctuated greeting misses the canned table and falls through to completion.**
///
/// **Action:** route "привіт, бот".
/// **Expected:** the stub's answer is sent verbatim; the stub saw the raw text.
#[tokio::test]
async fn test_punctuated_greeting_falls_through_to_completion() {
    let completion = StubCompletion::answering("Привіт, вождю!");
    let bot = Arc::new(MockBot::new());
    let router = router_with(completion.clone(), bot.clone());

    router.route(&text_event("привіт, бот")).await.unwrap();

    assert_eq!(bot.texts(), vec!["Привіт, вождю!"]);
    assert_eq!(completion.calls(), 1);
    assert_eq!(*completion.prompts.lock().unwrap(), vec!["привіт, бот"]);
}

/// **Test: "я думаю інакше" gets the fixed pattern reply.**
#[tokio::test]
async fn test_disagreement_pattern_reply() {
    let completion = StubCompletion::answering("AI");
    let bot = Arc::new(MockBot::new());
    let router = router_with(completion.clone(), bot.clone());

    router.route(&text_event("бот, я думаю інакше, бот")).await.unwrap();

    assert_eq!(bot.texts(), vec![DISAGREEMENT_REPLY]);
    assert_eq!(completion.calls(), 0);
}

/// **Test: Completion failure is masked by the apology string.**
///
/// **Setup:** Completion stub that always fails.
/// **Expected:** route returns Ok; exactly one send containing the apology.
#[tokio::test]
async fn test_completion_failure_sends_apology() {
    let completion = StubCompletion::failing();
    let bot = Arc::new(MockBot::new());
    let router = router_with(completion.clone(), bot.clone());

    let delivered = router
        .route(&text_event("бот яка найкраща армія для ТХ10?"))
        .await
        .unwrap();

    assert_eq!(delivered, 1);
    assert_eq!(bot.texts(), vec![APOLOGY_REPLY]);
    assert_eq!(completion.calls(), 1);
}

/// **Test: Messages not addressed to the bot produce no sends and no completion calls.**
#[tokio::test]
async fn test_unaddressed_messages_are_ignored() {
    let completion = StubCompletion::answering("AI");
    let bot = Arc::new(MockBot::new());
    let router = router_with(completion.clone(), bot.clone());

    for text in ["", "   ", "привіт", "скажи бот щось", "гарна атака!"] {
        let delivered = router.route(&text_event(text)).await.unwrap();
        assert_eq!(delivered, 0, "{:?}", text);
    }

    assert!(bot.sent().is_empty());
    assert_eq!(completion.calls(), 0);
}

/// **Test: Three joined members get three greetings, in order.**
///
/// **Setup:** Members "Тарас", no first name, "Olena".
/// **Expected:** three sends; the second uses the placeholder; all quote the join message.
#[tokio::test]
async fn test_three_members_three_greetings() {
    let completion = StubCompletion::answering("AI");
    let bot = Arc::new(MockBot::new());
    let router = router_with(completion.clone(), bot.clone());

    let event = BotEvent::MembersJoined {
        message: create_test_message(""),
        members: vec![
            member(1, Some("Тарас")),
            member(2, None),
            member(3, Some("Olena")),
        ],
    };

    let delivered = router.route(&event).await.unwrap();

    assert_eq!(delivered, 3);
    let texts = bot.texts();
    assert_eq!(texts.len(), 3);
    assert!(texts[0].contains("Тарас"));
    assert!(texts[1].contains(NEWCOMER_PLACEHOLDER));
    assert!(texts[2].contains("Olena"));
    assert!(bot
        .sent()
        .iter()
        .all(|r| r.reply_to.as_deref() == Some("1001")));
    assert_eq!(completion.calls(), 0);
}

/// **Test: A failed greeting send does not stop the remaining greetings.**
///
/// **Setup:** MockBot failing on its 2nd call; three members.
/// **Expected:** route returns Ok(2); first and third greetings recorded.
#[tokio::test]
async fn test_send_failure_does_not_stop_other_greetings() {
    let completion = StubCompletion::answering("AI");
    let bot = Arc::new(MockBot::failing_on([2]));
    let router = router_with(completion, bot.clone());

    let event = BotEvent::MembersJoined {
        message: create_test_message(""),
        members: vec![
            member(1, Some("Ann")),
            member(2, Some("Bob")),
            member(3, Some("Cid")),
        ],
    };

    let delivered = router.route(&event).await.unwrap();

    assert_eq!(delivered, 2);
    let texts = bot.texts();
    assert!(texts[0].contains("Ann"));
    assert!(texts[1].contains("Cid"));
}

/// **Test: A failed reply send is reported as zero deliveries, not as an error.**
#[tokio::test]
async fn test_reply_send_failure_is_not_an_error() {
    let completion = StubCompletion::answering("AI");
    let bot = Arc::new(MockBot::failing_on([1]));
    let router = router_with(completion, bot.clone());

    let delivered = router.route(&text_event("дякую бот")).await.unwrap();

    assert_eq!(delivered, 0);
    assert!(bot.sent().is_empty());
}

/// **Test: Same event twice yields the same replies.**
#[tokio::test]
async fn test_replies_are_repeatable() {
    let completion = StubCompletion::answering("AI");
    let bot = Arc::new(MockBot::new());
    let router = router_with(completion, bot);

    for text in ["спасибі бот", "привіт", "бот як справи?"] {
        let first = router.replies_for(&text_event(text)).await.unwrap();
        let second = router.replies_for(&text_event(text)).await.unwrap();
        assert_eq!(first, second, "{:?}", text);
    }
}
