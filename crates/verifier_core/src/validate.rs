use std::sync::LazyLock;

use regex::Regex;

/// Maximum trimmed length of a single keyword.
pub const MAX_WORD_LEN: usize = 15;

// Optional http/https scheme, dot-separated labels, optional path.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([\w-]+\.)+[\w-]+(/[\w\-./?%&=]*)?$").expect("valid url pattern")
});

/// Syntactic URL check. No network lookup, no canonicalization.
pub fn validate_url(input: &str) -> bool {
    URL_PATTERN.is_match(input)
}

/// A keyword list is valid when it is non-empty and every entry,
/// after trimming, is non-empty and at most [`MAX_WORD_LEN`] characters.
pub fn validate_words<S: AsRef<str>>(words: &[S]) -> bool {
    !words.is_empty()
        && words.iter().all(|word| {
            let trimmed = word.as_ref().trim();
            !trimmed.is_empty() && trimmed.chars().count() <= MAX_WORD_LEN
        })
}
