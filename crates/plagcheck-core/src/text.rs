//! Tokenisation shared by the analyzer passes.

use std::collections::HashSet;

/// Whitespace-delimited tokens.
#[inline]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Number of characters that are not whitespace.
#[inline]
pub fn non_whitespace_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Distinct tokens, compared case-insensitively.
pub fn unique_words(words: &[&str]) -> usize {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

/// Fragments between runs of `.`, `!` and `?`. Empty fragments are dropped,
/// whitespace-only fragments are kept.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .filter(|s| !s.is_empty())
        .collect()
}

/// First `n` characters (not bytes).
pub fn head_chars(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// Last `n` characters (not bytes).
pub fn tail_chars(text: &str, n: usize) -> String {
    let total = text.chars().count();
    text.chars().skip(total.saturating_sub(n)).collect()
}
