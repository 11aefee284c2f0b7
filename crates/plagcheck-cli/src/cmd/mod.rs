pub mod analyze;
pub mod upload;

use plagcheck_core::error::CheckError;
use plagcheck_core::view::UiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Check(#[from] CheckError),

    #[error(transparent)]
    Ui(#[from] UiError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Input(String),
}

pub type CliResult<T> = Result<T, CliError>;
