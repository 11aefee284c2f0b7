use crate::analyzer::{AnalysisResult, SourceMatch};
use serde::Serialize;
use strum::Display;

/// Which metric of the analysis drives a card's confidence label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMetric {
    Formality,
    Readability,
    Consistency,
    VocabularyDiversity,
}

impl SourceMetric {
    pub fn value(&self, result: &AnalysisResult) -> f64 {
        let analysis = &result.details.analysis;
        match self {
            SourceMetric::Formality => analysis.style.formality,
            SourceMetric::Readability => analysis.complexity.readability,
            SourceMetric::Consistency => analysis.style.consistency,
            SourceMetric::VocabularyDiversity => analysis.complexity.vocabulary_diversity,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SourceType {
    pub name: &'static str,
    pub base_url: &'static str,
    pub description: &'static str,
    /// Matched case-insensitively against the similarity match sources.
    pub keyword: &'static str,
    pub metric: SourceMetric,
}

impl SourceType {
    /// `"{base_url} {description}"`, the form the upload endpoint reports.
    pub fn summary(&self) -> String {
        format!("{} {}", self.base_url, self.description)
    }
}

pub const SOURCE_TYPES: [SourceType; 4] = [
    SourceType {
        name: "Academic Database",
        base_url: "scholar.google.com",
        description: "Academic publications and research papers",
        keyword: "academic",
        metric: SourceMetric::Formality,
    },
    SourceType {
        name: "Online Article",
        base_url: "research-hub.org",
        description: "Web-based research and reference articles",
        keyword: "online",
        metric: SourceMetric::Readability,
    },
    SourceType {
        name: "Professional Publication",
        base_url: "industry-insights.com",
        description: "Industry-specific publications",
        keyword: "professional",
        metric: SourceMetric::Consistency,
    },
    SourceType {
        name: "Educational Resource",
        base_url: "learning-platform.edu",
        description: "Educational websites and resources",
        keyword: "educational",
        metric: SourceMetric::VocabularyDiversity,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCard {
    pub name: String,
    pub base_url: String,
    pub description: String,
    pub confidence: ConfidenceLevel,
    pub match_score: u32,
}

/// The metric is read as a fraction: readability (already 0..=100) is
/// therefore High for anything above 0.8.
pub fn confidence_label(metric: f64) -> ConfidenceLevel {
    let score = metric * 100.0;
    if score > 80.0 {
        ConfidenceLevel::High
    } else if score > 50.0 {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Percentage of the first match whose source mentions `keyword`; 0 if none does.
pub fn match_score(matches: &[SourceMatch], keyword: &str) -> u32 {
    let keyword = keyword.to_lowercase();
    matches
        .iter()
        .find(|m| m.source.to_lowercase().contains(&keyword))
        .map(|m| (m.score * 100.0).round().max(0.0) as u32)
        .unwrap_or(0)
}

pub fn source_cards(result: &AnalysisResult) -> Vec<SourceCard> {
    let matches = &result.details.similarity.matches;
    SOURCE_TYPES
        .iter()
        .map(|source| SourceCard {
            name: source.name.to_string(),
            base_url: source.base_url.to_string(),
            description: source.description.to_string(),
            confidence: confidence_label(source.metric.value(result)),
            match_score: match_score(matches, source.keyword),
        })
        .collect()
}
