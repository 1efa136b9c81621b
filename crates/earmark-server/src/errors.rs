//! API error taxonomy and HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use earmark_core::media::SUPPORTED_MEDIA_TYPES;
use earmark_transcription::TranscriptionError;
use serde_json::json;
use tracing::{error, warn};

/// Errors surfaced to HTTP callers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The multipart body carried no `file` part.
    #[error("no audio file provided")]
    MissingFile,

    /// The uploaded MIME type is not on the allow-list.
    #[error("unsupported file type: {0}")]
    UnsupportedMediaType(String),

    /// The `options` part was not valid JSON.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The multipart body could not be read.
    #[error("malformed upload: {0}")]
    BadMultipart(String),

    /// The provider call failed or the gateway is unconfigured.
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Validation failures are 400; a missing credential is 503 (ours to
    /// fix); a provider failure is 502 (theirs).
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFile
            | Self::UnsupportedMediaType(_)
            | Self::InvalidOptions(_)
            | Self::BadMultipart(_) => StatusCode::BAD_REQUEST,
            Self::Transcription(TranscriptionError::NotConfigured) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Transcription(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// User-facing message for the JSON error body.
    fn message(&self) -> String {
        match self {
            Self::UnsupportedMediaType(mime) => format!(
                "unsupported file type: {mime}. supported types: {}",
                SUPPORTED_MEDIA_TYPES.join(", ")
            ),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Transcription(e) => error!(error = %e, "transcription pipeline failed"),
            client_error => warn!(error = %client_error, "rejected upload"),
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}
