//! Integration tests for [`coc_helper_bot::should_respond`].
//!
//! Covers: empty input, trigger word as first/last token, greeting + trigger anywhere, greeting
//! alone, punctuation attached to tokens, and repeatability.

use coc_helper_bot::should_respond;

/// **Test: Input with no tokens is never answered.**
///
/// **Expected:** false for empty, spaces, tabs and newlines.
#[test]
fn test_empty_token_sequence_is_ignored() {
    for text in ["", " ", "\t", "\n\n", "  \t \r\n "] {
        assert!(!should_respond(text), "{:?}", text);
    }
}

/// **Test: Trigger word as first or last token wins regardless of the rest.**
///
/// **Expected:** true for "бот"/"bot" at either end in any case.
#[test]
fn test_trigger_at_first_or_last_token() {
    let cases = [
        "бот",
        "bot",
        "Бот як прокачати королеву",
        "як прокачати королеву БОТ",
        "Bot which army for TH9",
        "which army for TH9 bot",
        "бот щось там bot",
    ];
    for text in cases {
        assert!(should_respond(text), "{:?}", text);
    }
}

/// **Test: Greeting plus trigger anywhere is answered; greeting alone is not.**
///
/// **Expected:** "привіт бот" → true; "привіт" → false; "здрастуйте мій бот друже" → true.
#[test]
fn test_greeting_requires_trigger() {
    assert!(should_respond("привіт бот"));
    assert!(should_respond("Привіт мій бот друже"));
    assert!(should_respond("здрастуйте шановний bot пане"));
    assert!(!should_respond("привіт"));
    assert!(!should_respond("привіт усім у клані"));
}

/// **Test: Trigger in the middle without a greeting is ignored.**
#[test]
fn test_mid_trigger_without_greeting_is_ignored() {
    assert!(!should_respond("скажи бот щось"));
    assert!(!should_respond("роботи сьогодні багато"));
    assert!(!should_respond("a robot is not a bot?"));
}

/// **Test: Punctuation stays part of the token.**
///
/// **Expected:** "привіт, бот" → true (last token is "бот"); "бот, ні" → false; "бот!" → false.
#[test]
fn test_punctuation_is_part_of_token() {
    assert!(should_respond("привіт, бот"));
    assert!(!should_respond("бот, ні"));
    assert!(!should_respond("бот!"));
}

/// **Test: Multi-word greetings never match a single token.**
///
/// **Expected:** "доброго дня мій бот друже" → false (needs a single-token greeting).
#[test]
fn test_multi_word_greetings_do_not_match_tokens() {
    assert!(!should_respond("доброго дня мій бот друже"));
    assert!(should_respond("доброго дня бот"));
}

/// **Test: Same input twice gives the same answer.**
#[test]
fn test_repeated_calls_agree() {
    for text in ["привіт бот", "привіт", "", "скажи бот щось", "bot"] {
        assert_eq!(should_respond(text), should_respond(text), "{:?}", text);
    }
}
