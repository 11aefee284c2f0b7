pub mod complexity;
pub mod simulation;
pub mod statistics;
pub mod style;
pub mod types;

pub use self::complexity::compute_complexity;
pub use self::statistics::compute_statistics;
pub use self::style::{compute_style, MarkerVocabulary};
pub use self::types::*;

use crate::config::DetectorConfig;
use crate::error::CheckResult;
use fastrand::Rng;
use tracing::debug;

/// Derives the descriptive metrics and the simulated scores of a text.
///
/// Holds no state between calls apart from the configuration. Randomness
/// comes from the `Rng` handed to each call.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    config: DetectorConfig,
    vocabulary: MarkerVocabulary,
}

impl TextAnalyzer {
    pub fn new(config: DetectorConfig) -> Self {
        let vocabulary = MarkerVocabulary::from_config(&config);
        Self { config, vocabulary }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn statistics(&self, text: &str) -> CheckResult<TextStatistics> {
        compute_statistics(text)
    }

    pub fn style(&self, text: &str, rng: &mut Rng) -> CheckResult<WritingStyle> {
        compute_style(text, &self.vocabulary, rng)
    }

    pub fn complexity(&self, text: &str) -> CheckResult<TextComplexity> {
        compute_complexity(text)
    }

    /// AI score (0..=100) for the text on its own.
    pub fn simulate_ai_detection(&self, text: &str, rng: &mut Rng) -> CheckResult<f64> {
        let complexity = self.complexity(text)?;
        let style = self.style(text, rng)?;
        Ok(simulation::ai_score(&complexity, &style, &self.config, rng))
    }

    pub fn simulate_similarity(&self, text: &str, rng: &mut Rng) -> CheckResult<SimilarityResult> {
        compute_statistics(text)?;
        Ok(simulation::similarity(text, &self.config, rng))
    }

    pub fn analyze(&self, text: &str, rng: &mut Rng) -> CheckResult<AnalysisResult> {
        let statistics = self.statistics(text)?;
        let style = self.style(text, rng)?;
        let complexity = self.complexity(text)?;

        let ai_score = simulation::ai_score(&complexity, &style, &self.config, rng);
        let similarity = simulation::similarity(text, &self.config, rng);
        let score = simulation::combine(ai_score, similarity.overall_similarity, &self.config);

        debug!(
            "Analysis: words={} ai={:.1} similarity={:.3} score={}",
            statistics.word_count, ai_score, similarity.overall_similarity, score
        );

        Ok(AnalysisResult {
            score,
            is_likely_plagiarized: simulation::is_likely_plagiarized(
                score,
                self.config.plagiarism_threshold,
            ),
            details: AnalysisDetails {
                ai_detection: simulation::ai_detection(ai_score, &self.config),
                similarity,
                analysis: TextAnalysis {
                    statistics,
                    style,
                    complexity,
                },
            },
        })
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
