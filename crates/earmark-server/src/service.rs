//! Request orchestration: gateway call, analysis, metadata stamping.

use chrono::{DateTime, Utc};
use earmark_core::types::{AnalysisResult, AudioPayload};
use earmark_transcription::{DeepgramClient, TranscriptionError};
use tracing::info;

/// One fully processed upload: analysis plus the request metadata and
/// timestamp attached by the orchestration layer.
#[derive(Debug, Clone)]
pub struct ProcessedUpload {
    /// Original filename from the upload.
    pub file_name: String,
    /// Upload size in bytes.
    pub file_size: usize,
    /// Declared MIME type.
    pub mime_type: String,
    /// Scorer output for the transcript.
    pub analysis: AnalysisResult,
    /// When processing completed.
    pub timestamp: DateTime<Utc>,
}

/// Transcribe and analyze one payload.
///
/// Calls the gateway, runs the relevance scorer on the result, and stamps
/// the current time. The analysis itself is never mutated afterwards —
/// response shaping works on a separate outward copy.
pub async fn process(
    gateway: &DeepgramClient,
    payload: &AudioPayload,
) -> Result<ProcessedUpload, TranscriptionError> {
    info!(file = %payload.file_name, size = payload.size(), "processing upload");

    let transcript = gateway.transcribe(payload).await?;
    let analysis = earmark_detect::analyze(&transcript);

    Ok(ProcessedUpload {
        file_name: payload.file_name.clone(),
        file_size: payload.size(),
        mime_type: payload.mime_type.clone(),
        analysis,
        timestamp: Utc::now(),
    })
}
