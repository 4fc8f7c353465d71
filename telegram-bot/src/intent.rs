//! Trigger detection: decides whether a group message is addressed to the bot.
//!
//! Pure functions; the reply chain calls [`should_respond`] as its gate.

/// Words that address the bot when they open or close a message.
pub const TRIGGER_WORDS: [&str; 2] = ["бот", "bot"];

/// Greetings that address the bot when the message also names it anywhere.
///
/// Entries are compared against single whitespace-separated tokens, so the multi-word ones
/// ("доброго дня", "добрий день", "доброго вечора") can never match.
pub const GREETINGS: [&str; 5] = [
    "привіт",
    "здрастуйте",
    "доброго дня",
    "добрий день",
    "доброго вечора",
];

/// Lower-cases, trims and splits `text` on whitespace. Empty or blank input gives no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn is_trigger(token: &str) -> bool {
    TRIGGER_WORDS.contains(&token)
}

/// Returns true if the message should get a reply.
///
/// First match wins:
/// 1. no tokens → false;
/// 2. first or last token is a trigger word → true;
/// 3. some token is a greeting and some token is a trigger word → true;
/// 4. otherwise false.
pub fn should_respond(text: &str) -> bool {
    let tokens = tokenize(text);

    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return false;
    };

    if is_trigger(first) || is_trigger(last) {
        return true;
    }

    let greeted = tokens
        .iter()
        .any(|token| GREETINGS.contains(&token.as_str()));
    greeted && tokens.iter().any(|token| is_trigger(token))
}
