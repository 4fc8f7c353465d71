//! Fixed reply texts and the lookups over them.

/// Exact-match replies, keyed by the lower-cased, trimmed message.
pub const CANNED_REPLIES: [(&str, &str); 6] = [
    ("привіт бот", "Привіт! Чим можу допомогти з Clash of Clans?"),
    ("здрастуйте бот", "Вітаю! Запитуйте про Clash of Clans."),
    ("доброго дня бот", "Доброго дня! Чим допомогти у Clash of Clans?"),
    (
        "доброго вечора бот",
        "Доброго вечора! Питайте, якщо потрібна допомога з Clash of Clans.",
    ),
    ("дякую бот", "Радий допомогти!"),
    ("спасибі бот", "Будь ласка!"),
];

/// Phrase ("I think otherwise") answered with [`DISAGREEMENT_REPLY`] wherever it appears.
pub const DISAGREEMENT_PHRASE: &str = "я думаю інакше";

pub const DISAGREEMENT_REPLY: &str = "Цікава думка! Можеш розповісти більше про Clash of Clans?";

/// Sent instead of a completion when the completion API fails for any reason.
pub const APOLOGY_REPLY: &str = "Вибач, сталася помилка при спробі відповісти.";

/// Lower-cases and trims. Inner whitespace and punctuation are kept.
pub fn normalize_key(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Canned reply for an exact (normalized) match.
pub fn canned_reply(text: &str) -> Option<&'static str> {
    let key = normalize_key(text);
    CANNED_REPLIES
        .iter()
        .find(|(phrase, _)| *phrase == key)
        .map(|(_, reply)| *reply)
}

/// [`DISAGREEMENT_REPLY`] when the normalized text contains [`DISAGREEMENT_PHRASE`].
pub fn pattern_reply(text: &str) -> Option<&'static str> {
    normalize_key(text)
        .contains(DISAGREEMENT_PHRASE)
        .then_some(DISAGREEMENT_REPLY)
}
