use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::State, Json};
use plagcheck_core::analyzer::AnalysisResult;
use plagcheck_core::checker::AnalyzeRequest;
use plagcheck_core::view::render::{render_result, RenderedResult};
use std::sync::Arc;
use tracing::info;

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalysisResult>> {
    let result = state.detector.analyze(&payload.text)?;
    info!(
        "🔎 Analyzed {} words: score {}",
        result.details.analysis.statistics.word_count, result.score
    );
    Ok(Json(result))
}

pub async fn render(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> AppResult<Json<RenderedResult>> {
    let result = state.detector.analyze(&payload.text)?;
    Ok(Json(render_result(&result)))
}
