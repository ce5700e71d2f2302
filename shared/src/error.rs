use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Everything that can go wrong between picking a file and getting a prediction back.
///
/// Serialized with a `kind` tag so the backend can hand the same value to the
/// browser unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InferenceError {
    #[display(fmt = "upload rejected: {}", reason)]
    UploadRejected { reason: String },
    #[display(fmt = "inference is not configured: {}", reason)]
    Configuration { reason: String },
    #[display(fmt = "could not reach the inference service: {}", reason)]
    Transport { reason: String },
    #[display(fmt = "inference service returned HTTP {}", status)]
    Http { status: u16, detail: Option<String> },
    #[display(fmt = "malformed inference response: {}", reason)]
    Parse { reason: String },
}

impl std::error::Error for InferenceError {}

impl InferenceError {
    /// Human-readable detail, if the failure carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            InferenceError::Http { detail, .. } => detail.as_deref(),
            InferenceError::UploadRejected { reason }
            | InferenceError::Configuration { reason }
            | InferenceError::Transport { reason }
            | InferenceError::Parse { reason } => Some(reason),
        }
    }

    /// The line shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            InferenceError::UploadRejected { reason } => format!("Upload rejected: {}", reason),
            other => format!(
                "Prediction failed: {}",
                other.detail().unwrap_or("Unknown error")
            ),
        }
    }
}

/// Error body of the inference endpoint (FastAPI style).
#[derive(Debug, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    /// Pulls `detail` out of an error body. Strings are taken as-is, other JSON
    /// values (validation error lists) are rendered compactly.
    pub fn extract(body: &str) -> Option<String> {
        let parsed: ErrorDetail = serde_json::from_str(body).ok()?;
        match parsed.detail? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}
