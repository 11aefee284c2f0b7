use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall score on a 0..=100 scale.
    pub score: u8,
    pub is_likely_plagiarized: bool,
    pub details: AnalysisDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDetails {
    pub ai_detection: AiDetection,
    pub similarity: SimilarityResult,
    pub analysis: TextAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysis {
    pub statistics: TextStatistics,
    pub style: WritingStyle,
    pub complexity: TextComplexity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDetection {
    /// AI score divided by 100.
    pub probability: f64,
    pub label: AiLabel,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum AiLabel {
    #[serde(rename = "AI-generated")]
    #[strum(serialize = "AI-generated")]
    AiGenerated,
    #[serde(rename = "human-written")]
    #[strum(serialize = "human-written")]
    HumanWritten,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub word_count: usize,
    pub character_count: usize,
    pub unique_words: usize,
    pub average_word_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingStyle {
    /// Marker balance shifted by 0.5. Not clamped: marker-heavy text leaves [0, 1].
    pub formality: f64,
    pub tone: Tone,
    /// Random in [0.5, 1.0); not a measurement.
    pub consistency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComplexity {
    pub readability: f64,
    pub sentence_complexity: f64,
    pub vocabulary_diversity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub overall_similarity: f64,
    pub matches: Vec<SourceMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMatch {
    pub source: String,
    pub score: f64,
    pub snippet: String,
}
