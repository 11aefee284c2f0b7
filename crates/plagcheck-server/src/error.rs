use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plagcheck_core::checker::CheckerResponse;
use plagcheck_core::error::CheckError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upload error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("{0}")]
    Check(#[from] CheckError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Multipart(e) => (e.status(), e.body_text()),
            AppError::Check(e) => match e {
                CheckError::EmptyInput | CheckError::UnsupportedFileType(_) => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                CheckError::NotInitialized => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
                other => {
                    tracing::error!("Analysis Error: {}", other);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
            AppError::Validation(s) => (StatusCode::BAD_REQUEST, s),
        };

        (status, Json(CheckerResponse::error(msg))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
