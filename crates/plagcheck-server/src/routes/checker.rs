use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::extract::{Multipart, State};
use axum::Json;
use plagcheck_core::checker::CheckerResponse;
use plagcheck_core::consts::UPLOAD_PREVIEW_CHARS;
use plagcheck_core::intake;
use plagcheck_core::text;
use plagcheck_core::view::SOURCE_TYPES;
use std::sync::Arc;
use tracing::{debug, info};

/// Score every upload receives.
pub const SIMULATED_SCORE: f64 = 28.0;

/// Handles `POST /checker` with the document in the multipart field `file`.
///
/// The reply does not depend on the document: the score and the source
/// list are fixed. Only the name is sanitised and echoed back.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<CheckerResponse>> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let name = field.file_name().map(str::to_string).unwrap_or_default();
            let bytes = field.bytes().await?;
            upload = Some((name, bytes));
            break;
        }
    }

    let (raw_name, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file part in request".to_string()))?;

    intake::check_extension(&raw_name, &state.allowed_extensions)?;

    let filename = intake::secure_filename(&raw_name);
    let content = intake::decode_text(&bytes);
    let document_id = state.next_document_id();

    info!(
        "📄 Document #{} received: '{}' ({} bytes)",
        document_id,
        filename,
        bytes.len()
    );
    debug!("Preview: {}", text::head_chars(&content, UPLOAD_PREVIEW_CHARS));

    let (score, sources) = simulate_plagiarism_analysis(&content);
    info!("📤 Document #{} scored {}", document_id, score);

    Ok(Json(CheckerResponse::success(
        score,
        sources,
        filename,
        document_id,
    )))
}

pub fn simulate_plagiarism_analysis(_content: &str) -> (f64, Vec<String>) {
    let sources = SOURCE_TYPES.iter().map(|source| source.summary()).collect();
    (SIMULATED_SCORE, sources)
}
