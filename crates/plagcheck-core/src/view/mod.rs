//! Presentation layer: application state and HTML fragments for results.

pub mod render;
pub mod sources;
pub mod state;

pub use self::render::{RenderedResult, RenderedUpload};
pub use self::sources::{ConfidenceLevel, SourceCard, SourceType, SOURCE_TYPES};
pub use self::state::{AppState, InputTab, Section, UploadedFile};

use crate::error::CheckError;
use thiserror::Error;

/// Failures surfaced to the user. `Display` is the exact message shown.
#[derive(Error, Debug)]
pub enum UiError {
    #[error("Failed to initialize plagiarism detector. Please refresh the page.")]
    InitFailed(#[source] CheckError),

    #[error("Detector not initialized. Please wait...")]
    NotReady,

    #[error("Please enter or upload some text to analyze")]
    EmptyInput,

    #[error("Please upload a valid document file ({0})")]
    InvalidFile(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(#[source] CheckError),

    #[error("Error analyzing file")]
    ServerRejected,
}
