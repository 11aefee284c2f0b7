use super::types::TextComplexity;
use crate::consts::{
    READABILITY_OFFSET, READABILITY_SENTENCE_FACTOR, READABILITY_WORD_FACTOR, SCORE_CEILING,
    SENTENCE_COMPLEXITY_DIVISOR,
};
use crate::error::{CheckError, CheckResult};
use crate::text;

pub fn compute_complexity(text: &str) -> CheckResult<TextComplexity> {
    let words = text::words(text);
    if words.is_empty() {
        return Err(CheckError::EmptyInput);
    }

    let word_count = words.len() as f64;
    // Text without a single fragment (e.g. "...") reads as one sentence.
    let sentence_count = text::sentences(text).len().max(1) as f64;

    let average_word_length = text::non_whitespace_chars(text) as f64 / word_count;
    let average_sentence_length = word_count / sentence_count;

    let readability = READABILITY_WORD_FACTOR * average_word_length
        + READABILITY_SENTENCE_FACTOR * average_sentence_length
        - READABILITY_OFFSET;

    Ok(TextComplexity {
        readability: readability.clamp(0.0, SCORE_CEILING),
        sentence_complexity: average_sentence_length / SENTENCE_COMPLEXITY_DIVISOR,
        vocabulary_diversity: text::unique_words(&words) as f64 / word_count,
    })
}
