//! Stand-ins for AI detection and source matching.
//!
//! Nothing here compares the text against a model or a corpus: the scores are
//! random draws shaped by the descriptive metrics, so identical input can give
//! different results from one call to the next.

use super::types::{
    AiDetection, AiLabel, Confidence, SimilarityResult, SourceMatch, TextComplexity, WritingStyle,
};
use crate::config::DetectorConfig;
use crate::consts::{ACADEMIC_MATCH, ONLINE_MATCH, SCORE_CEILING, SNIPPET_ELLIPSIS};
use crate::text;
use fastrand::Rng;

/// AI score on a 0..=100 scale.
pub fn ai_score(
    complexity: &TextComplexity,
    style: &WritingStyle,
    config: &DetectorConfig,
    rng: &mut Rng,
) -> f64 {
    let base = config.ai_base_min + rng.f64() * config.ai_base_span;
    let complexity_factor = complexity.readability / SCORE_CEILING;

    // Informal text pushes formality below zero; the floor keeps the
    // probability non-negative.
    (base * (complexity_factor + style.formality) / 2.0).clamp(0.0, SCORE_CEILING)
}

pub fn ai_detection(ai_score: f64, config: &DetectorConfig) -> AiDetection {
    let label = if ai_score > config.ai_label_threshold {
        AiLabel::AiGenerated
    } else {
        AiLabel::HumanWritten
    };

    let confidence = if ai_score > config.ai_high_confidence {
        Confidence::High
    } else if ai_score > config.ai_label_threshold {
        Confidence::Medium
    } else {
        Confidence::Low
    };

    AiDetection {
        probability: ai_score / SCORE_CEILING,
        label,
        confidence,
    }
}

pub fn similarity(text: &str, config: &DetectorConfig, rng: &mut Rng) -> SimilarityResult {
    let overall = rng.f64() * config.max_similarity;
    let (academic, academic_share) = ACADEMIC_MATCH;
    let (online, online_share) = ONLINE_MATCH;

    SimilarityResult {
        overall_similarity: overall,
        matches: vec![
            SourceMatch {
                source: academic.to_string(),
                score: overall * academic_share,
                snippet: text::head_chars(text, config.snippet_chars) + SNIPPET_ELLIPSIS,
            },
            SourceMatch {
                source: online.to_string(),
                score: overall * online_share,
                snippet: text::tail_chars(text, config.snippet_chars) + SNIPPET_ELLIPSIS,
            },
        ],
    }
}

/// Weighted blend of the AI score and the similarity percentage, rounded onto 0..=100.
pub fn combine(ai_score: f64, overall_similarity: f64, config: &DetectorConfig) -> u8 {
    let raw = ai_score * config.ai_weight
        + overall_similarity * SCORE_CEILING * config.similarity_weight;

    raw.clamp(0.0, SCORE_CEILING).round() as u8
}

#[inline]
pub fn is_likely_plagiarized(score: u8, threshold: u8) -> bool {
    score > threshold
}
