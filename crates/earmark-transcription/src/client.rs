//! Deepgram prerecorded-transcription client.

use earmark_core::types::{Alternative, AudioPayload, Channel, TopicMention, TranscriptResult};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, error, instrument};

use crate::types::TranscriptionError;

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.deepgram.com";

/// Transcription model requested from the provider.
const MODEL: &str = "nova-2";

/// Configuration for the Deepgram client.
#[derive(Debug, Clone)]
pub struct DeepgramConfig {
    /// Provider API key. `None` means the gateway is unconfigured and
    /// every call fails fast with [`TranscriptionError::NotConfigured`].
    pub api_key: Option<String>,
    /// Provider base URL, overridable for tests.
    pub base_url: String,
    /// Target language requested from the provider (e.g. `zh-CN`).
    pub language: String,
}

impl Default for DeepgramConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            language: "zh-CN".into(),
        }
    }
}

/// Client for the provider's prerecorded `/v1/listen` endpoint.
pub struct DeepgramClient {
    config: DeepgramConfig,
    client: reqwest::Client,
}

impl DeepgramClient {
    /// Create a new client.
    #[must_use]
    pub fn new(config: DeepgramConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a new client with a shared HTTP client.
    #[must_use]
    pub fn with_client(config: DeepgramConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Whether an API key is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Transcribe one audio payload.
    ///
    /// POSTs the raw bytes with the payload's MIME type as
    /// `Content-Type` and smart formatting, diarization, utterances,
    /// topic detection, summarization, and entity detection enabled.
    ///
    /// No retries: a single provider failure is a single error.
    #[instrument(
        skip(self, payload),
        fields(mime = %payload.mime_type, size = payload.size())
    )]
    pub async fn transcribe(
        &self,
        payload: &AudioPayload,
    ) -> Result<TranscriptResult, TranscriptionError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            error!("transcription requested but no provider API key is configured");
            return Err(TranscriptionError::NotConfigured);
        };

        let url = format!("{}/v1/listen", self.config.base_url);

        debug!(model = MODEL, language = %self.config.language, "sending transcription request");

        let response = self
            .client
            .post(&url)
            .query(&[
                ("model", MODEL),
                ("smart_format", "true"),
                ("diarize", "true"),
                ("utterances", "true"),
                ("detect_topics", "true"),
                ("summarize", "v2"),
                ("detect_entities", "true"),
                ("language", self.config.language.as_str()),
            ])
            .header(AUTHORIZATION, format!("Token {api_key}"))
            .header(CONTENT_TYPE, payload.mime_type.as_str())
            .body(payload.bytes.clone())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!(status, %message, "provider rejected transcription request");
            return Err(TranscriptionError::Provider { status, message });
        }

        let body: ListenResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

        Ok(body.into_transcript())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire shapes
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level provider response.
#[derive(Debug, Deserialize)]
struct ListenResponse {
    #[serde(default)]
    results: Option<RawResults>,
}

impl ListenResponse {
    /// Convert the wire shape into the shared transcript type.
    ///
    /// A 2xx response without a `results` object maps to the empty
    /// transcript; downstream analysis treats that as "no channels".
    fn into_transcript(self) -> TranscriptResult {
        let Some(results) = self.results else {
            return TranscriptResult::default();
        };
        TranscriptResult {
            channels: results
                .channels
                .into_iter()
                .map(|c| Channel {
                    alternatives: c
                        .alternatives
                        .into_iter()
                        .map(|a| Alternative {
                            transcript: a.transcript,
                        })
                        .collect(),
                })
                .collect(),
            summary: results.summary.and_then(|s| s.short),
            topics: results
                .topics
                .map(|t| {
                    t.topics
                        .into_iter()
                        .map(|raw| TopicMention {
                            topic: raw.topic,
                            confidence: raw.confidence,
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawResults {
    #[serde(default)]
    channels: Vec<RawChannel>,
    #[serde(default)]
    summary: Option<RawSummary>,
    #[serde(default)]
    topics: Option<RawTopics>,
}

#[derive(Debug, Deserialize)]
struct RawChannel {
    #[serde(default)]
    alternatives: Vec<RawAlternative>,
}

#[derive(Debug, Deserialize)]
struct RawAlternative {
    #[serde(default)]
    transcript: String,
}

#[derive(Debug, Deserialize)]
struct RawSummary {
    #[serde(default)]
    short: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawTopics {
    #[serde(default)]
    topics: Vec<RawTopic>,
}

#[derive(Debug, Deserialize)]
struct RawTopic {
    topic: String,
    #[serde(default, alias = "confidence_score")]
    confidence: Option<f64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
