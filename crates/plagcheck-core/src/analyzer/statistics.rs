use super::types::TextStatistics;
use crate::error::{CheckError, CheckResult};
use crate::text;

pub fn compute_statistics(text: &str) -> CheckResult<TextStatistics> {
    let words = text::words(text);
    if words.is_empty() {
        return Err(CheckError::EmptyInput);
    }

    let character_count = text::non_whitespace_chars(text);

    Ok(TextStatistics {
        word_count: words.len(),
        character_count,
        unique_words: text::unique_words(&words),
        average_word_length: character_count as f64 / words.len() as f64,
    })
}
