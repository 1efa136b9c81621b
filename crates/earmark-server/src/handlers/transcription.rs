//! Upload handler: multipart extraction, validation, response shaping.

use axum::Json;
use axum::extract::{Multipart, State};
use earmark_core::media::is_supported_media_type;
use earmark_core::types::AudioPayload;
use tracing::info;

use crate::errors::ApiError;
use crate::service::{self, ProcessedUpload};
use crate::state::AppState;

/// Placeholder returned in place of the transcript and summary when the
/// content is not frontend-related and the caller did not force detection.
pub const NOT_RELEVANT_PLACEHOLDER: &str = "内容与前端技术无关。";

/// Caller options carried in the optional `options` multipart part.
#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranscriptionOptions {
    /// Return full results even when computed relevance is negative.
    pub force_detection: bool,
}

/// Response body for `POST /transcription/audio`.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionResponse {
    file_name: String,
    file_size: usize,
    mime_type: String,
    transcript: String,
    is_frontend_related: bool,
    relevance_score: u8,
    frontend_keywords_detected: Vec<String>,
    frontend_topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<String>,
    timestamp: String,
}

impl TranscriptionResponse {
    /// Shape the outward response from a processed upload.
    ///
    /// When the verdict is negative and detection was not forced, the
    /// transcript and summary are replaced with the fixed placeholder and
    /// the keyword list is emptied. The relevance score always reports
    /// the true computed value, and the underlying analysis is untouched.
    #[must_use]
    pub fn from_processed(processed: &ProcessedUpload, options: TranscriptionOptions) -> Self {
        let analysis = &processed.analysis;
        let suppress = !options.force_detection && !analysis.is_relevant;

        let (transcript, summary, keywords) = if suppress {
            (
                NOT_RELEVANT_PLACEHOLDER.to_owned(),
                Some(NOT_RELEVANT_PLACEHOLDER.to_owned()),
                Vec::new(),
            )
        } else {
            (
                analysis.transcript.clone(),
                analysis.summary.clone(),
                analysis.keywords.iter().map(|k| (*k).to_owned()).collect(),
            )
        };

        Self {
            file_name: processed.file_name.clone(),
            file_size: processed.file_size,
            mime_type: processed.mime_type.clone(),
            transcript,
            is_frontend_related: analysis.is_relevant,
            relevance_score: analysis.relevance_score,
            frontend_keywords_detected: keywords,
            frontend_topics: analysis.topics.clone(),
            summary,
            timestamp: processed.timestamp.to_rfc3339(),
        }
    }
}

/// `POST /transcription/audio` — transcribe an upload and score it.
///
/// Multipart form: required `file` part, optional `options` part with
/// JSON `{"forceDetection": bool}`. The MIME allow-list is enforced
/// before the provider is called.
pub async fn transcribe_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let mut payload: Option<AudioPayload> = None;
    let mut options = TranscriptionOptions::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadMultipart(e.to_string()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_owned();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadMultipart(e.to_string()))?;
                payload = Some(AudioPayload {
                    bytes,
                    mime_type,
                    file_name,
                });
            }
            Some("options") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadMultipart(e.to_string()))?;
                options = serde_json::from_str(&text)
                    .map_err(|e| ApiError::InvalidOptions(e.to_string()))?;
            }
            _ => {}
        }
    }

    let payload = payload.ok_or(ApiError::MissingFile)?;

    if !is_supported_media_type(&payload.mime_type) {
        return Err(ApiError::UnsupportedMediaType(payload.mime_type));
    }

    let processed = service::process(&state.gateway, &payload).await?;

    if !processed.analysis.is_relevant {
        info!(
            file = %processed.file_name,
            score = processed.analysis.relevance_score,
            "upload is not frontend related"
        );
    }

    Ok(Json(TranscriptionResponse::from_processed(
        &processed, options,
    )))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
