use super::sources::{source_cards, SourceCard};
use super::UiError;
use crate::analyzer::AnalysisResult;
use crate::checker::CheckerResponse;
use serde::Serialize;

/// HTML fragments for one analysis, ready to drop into the page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResult {
    pub score: u8,
    pub percentage: String,
    pub progress: String,
    pub sources: String,
    pub statistics: String,
    pub result: AnalysisResult,
}

/// Fragments for a `/checker` reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedUpload {
    pub percentage: String,
    pub sources: String,
    pub filename: Option<String>,
}

pub fn render_result(result: &AnalysisResult) -> RenderedResult {
    RenderedResult {
        score: result.score,
        percentage: format!("{}%", result.score),
        progress: render_progress(result.score),
        sources: render_sources(&source_cards(result)),
        statistics: render_statistics(result),
        result: result.clone(),
    }
}

/// Circular indicator: the plagiarised share of a conic gradient.
pub fn render_progress(score: u8) -> String {
    format!(
        r#"<div id="plagiarism-progress" style="background: conic-gradient(var(--plagiarized-color) {s}%, var(--original-color) {s}% 100%)"><span id="plagiarism-percentage">{s}%</span></div>"#,
        s = score
    )
}

pub fn render_sources(cards: &[SourceCard]) -> String {
    if cards.is_empty() {
        return r#"<p class="no-matches">No significant matches found</p>"#.to_string();
    }

    cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="source-item">
    <div class="source-details">
        <strong>{name}</strong>
        <div class="source-meta">
            <small>{url}</small>
            <small class="description">{description}</small>
        </div>
        <div class="confidence-indicator {class}">{confidence} Confidence</div>
    </div>
    <div class="match-details">
        <span class="match-percentage">{score}%</span>
        <div class="match-bar" style="width: {score}%"></div>
    </div>
</div>
"#,
                name = html_escape(&card.name),
                url = html_escape(&card.base_url),
                description = html_escape(&card.description),
                class = card.confidence.css_class(),
                confidence = card.confidence,
                score = card.match_score,
            )
        })
        .collect()
}

pub fn render_statistics(result: &AnalysisResult) -> String {
    let ai = &result.details.ai_detection;
    let stats = &result.details.analysis.statistics;
    let style = &result.details.analysis.style;
    let complexity = &result.details.analysis.complexity;

    format!(
        r#"<h3>Content Analysis</h3>
<p>AI Content Probability: <span>{:.1}%</span></p>
<p>AI Detection Confidence: <span>{}</span></p>
<p>Writing Style: <span>{}</span></p>
<p>Style Consistency: <span>{:.1}%</span></p>
<h3>Text Metrics</h3>
<p>Word Count: <span>{}</span></p>
<p>Character Count: <span>{}</span></p>
<p>Unique Words: <span>{}</span></p>
<p>Average Word Length: <span>{:.2}</span></p>
<h3>Readability</h3>
<p>Complexity Score: <span>{:.1}</span></p>
<p>Vocabulary Diversity: <span>{:.1}%</span></p>
"#,
        ai.probability * 100.0,
        ai.confidence,
        style.tone,
        style.consistency * 100.0,
        stats.word_count,
        stats.character_count,
        stats.unique_words,
        stats.average_word_length,
        complexity.readability,
        complexity.vocabulary_diversity * 100.0,
    )
}

/// Renders a server reply. Anything but `status: "success"` is a rejection;
/// a success without a score renders as `0%`.
pub fn render_checker_response(response: &CheckerResponse) -> Result<RenderedUpload, UiError> {
    if !response.is_success() {
        return Err(UiError::ServerRejected);
    }

    let sources = response
        .matched_sources
        .iter()
        .map(|source| format!("<p>{}</p>", html_escape(source)))
        .collect::<String>();

    Ok(RenderedUpload {
        percentage: format!("{}%", response.plagiarism_score.unwrap_or(0.0)),
        sources,
        filename: response.filename.clone(),
    })
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
