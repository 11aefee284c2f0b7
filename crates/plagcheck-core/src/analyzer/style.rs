use super::types::{Tone, WritingStyle};
use crate::config::DetectorConfig;
use crate::consts::{CONSISTENCY_FLOOR, FORMALITY_BASELINE};
use crate::error::{CheckError, CheckResult};
use crate::text;
use fastrand::Rng;
use std::collections::HashSet;

/// Register marker words, stored lower-cased.
#[derive(Debug, Clone)]
pub struct MarkerVocabulary {
    formal: HashSet<String>,
    informal: HashSet<String>,
}

impl MarkerVocabulary {
    pub fn from_config(config: &DetectorConfig) -> Self {
        Self {
            formal: config.get_formal_markers().into_iter().collect(),
            informal: config.get_informal_markers().into_iter().collect(),
        }
    }

    /// (formal, informal) hits. Tokens must match exactly, so trailing
    /// punctuation ("however,") does not count.
    pub fn count(&self, words: &[&str]) -> (usize, usize) {
        words.iter().fold((0, 0), |(formal, informal), w| {
            let w = w.to_lowercase();
            (
                formal + usize::from(self.formal.contains(&w)),
                informal + usize::from(self.informal.contains(&w)),
            )
        })
    }
}

impl Default for MarkerVocabulary {
    fn default() -> Self {
        Self::from_config(&DetectorConfig::default())
    }
}

pub fn compute_style(
    text: &str,
    vocabulary: &MarkerVocabulary,
    rng: &mut Rng,
) -> CheckResult<WritingStyle> {
    let words = text::words(text);
    if words.is_empty() {
        return Err(CheckError::EmptyInput);
    }

    let (formal, informal) = vocabulary.count(&words);
    let formality = (formal as f64 - informal as f64) / words.len() as f64 + FORMALITY_BASELINE;

    let tone = if formal > informal {
        Tone::Formal
    } else {
        Tone::Casual
    };

    Ok(WritingStyle {
        formality,
        tone,
        consistency: rng.f64() * (1.0 - CONSISTENCY_FLOOR) + CONSISTENCY_FLOOR,
    })
}
