use serde::{Deserialize, Serialize};

/// Outcome marker of a `/checker` upload. Anything other than the two known
/// values is kept as `Unknown` instead of failing the whole decode.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum CheckStatus {
    Success,
    Error,
    #[default]
    Unknown,
}

impl From<String> for CheckStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "success" => CheckStatus::Success,
            "error" => CheckStatus::Error,
            _ => CheckStatus::Unknown,
        }
    }
}

/// Body returned by `POST /checker`.
///
/// Field names are snake_case on the wire. Every field is optional on decode
/// because the upload path never validated the server's reply.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CheckerResponse {
    #[serde(default)]
    pub status: CheckStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plagiarism_score: Option<f64>,
    #[serde(default)]
    pub matched_sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckerResponse {
    pub fn success(
        plagiarism_score: f64,
        matched_sources: Vec<String>,
        filename: String,
        document_id: u64,
    ) -> Self {
        Self {
            status: CheckStatus::Success,
            plagiarism_score: Some(plagiarism_score),
            matched_sources,
            filename: Some(filename),
            document_id: Some(document_id),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Error,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CheckStatus::Success
    }
}

/// Body of the JSON analysis endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyzeRequest {
    pub text: String,
}
