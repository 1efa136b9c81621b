//! Domain types shared across the Earmark crates.

use bytes::Bytes;

/// One uploaded audio file, held in memory for the duration of a request.
///
/// Created by the upload handler, handed to the transcription gateway,
/// and dropped when the response is produced. Never persisted.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    /// Raw file contents.
    pub bytes: Bytes,
    /// MIME type as declared by the upload.
    pub mime_type: String,
    /// Original filename as declared by the upload.
    pub file_name: String,
}

impl AudioPayload {
    /// Size of the payload in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Structured transcription result returned by the provider gateway.
///
/// Mirrors the provider's channel → alternative hierarchy: each audio
/// channel carries one or more alternative decodings, best-first.
#[derive(Debug, Clone, Default)]
pub struct TranscriptResult {
    /// Ordered audio channels.
    pub channels: Vec<Channel>,
    /// Short summary of the audio, when the provider produced one.
    pub summary: Option<String>,
    /// Topics the provider detected, in provider order.
    pub topics: Vec<TopicMention>,
}

impl TranscriptResult {
    /// The primary transcript: first channel, first alternative.
    ///
    /// Returns `None` when the result has no channels or the first
    /// channel has no alternatives.
    #[must_use]
    pub fn primary_transcript(&self) -> Option<&str> {
        self.channels
            .first()
            .and_then(|c| c.alternatives.first())
            .map(|a| a.transcript.as_str())
    }
}

/// One audio channel of a transcription result.
#[derive(Debug, Clone, Default)]
pub struct Channel {
    /// Alternative decodings of this channel, best-first.
    pub alternatives: Vec<Alternative>,
}

/// One alternative decoding of a channel.
#[derive(Debug, Clone, Default)]
pub struct Alternative {
    /// The transcribed text.
    pub transcript: String,
}

/// A topic the provider detected in the audio.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicMention {
    /// Topic label.
    pub topic: String,
    /// Provider confidence for this topic, when reported.
    pub confidence: Option<f64>,
}

/// Verdict of the keyword scorer for one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceVerdict {
    /// Whether at least one keyword matched.
    pub is_relevant: bool,
    /// Matched keywords, in keyword-list scan order.
    pub keywords: Vec<&'static str>,
    /// Relevance score in `0..=100`.
    pub relevance_score: u8,
}

impl RelevanceVerdict {
    /// The verdict for an empty or unmatched transcript.
    #[must_use]
    pub fn none() -> Self {
        Self {
            is_relevant: false,
            keywords: Vec::new(),
            relevance_score: 0,
        }
    }
}

/// Full analysis of one transcription result.
///
/// Combines the primary transcript and summary with the scorer's verdict
/// and the filtered topic labels. A pure function of the transcript —
/// request metadata and the response timestamp are attached by the
/// orchestration layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Primary transcript text (empty when the result had no channels).
    pub transcript: String,
    /// Provider summary, when present.
    pub summary: Option<String>,
    /// Whether the transcript is relevant to the target domain.
    pub is_relevant: bool,
    /// Relevance score in `0..=100`.
    pub relevance_score: u8,
    /// Matched keywords, in keyword-list scan order.
    pub keywords: Vec<&'static str>,
    /// Topic labels that passed the keyword filter, in input order.
    pub topics: Vec<String>,
}

impl AnalysisResult {
    /// The all-empty result for a transcription with no usable channels.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            transcript: String::new(),
            summary: None,
            is_relevant: false,
            relevance_score: 0,
            keywords: Vec::new(),
            topics: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(transcript: &str) -> TranscriptResult {
        TranscriptResult {
            channels: vec![Channel {
                alternatives: vec![Alternative {
                    transcript: transcript.into(),
                }],
            }],
            summary: None,
            topics: Vec::new(),
        }
    }

    #[test]
    fn primary_transcript_first_channel_first_alternative() {
        let mut result = result_with("primary");
        result.channels.push(Channel {
            alternatives: vec![Alternative {
                transcript: "secondary channel".into(),
            }],
        });
        result.channels[0].alternatives.push(Alternative {
            transcript: "secondary alternative".into(),
        });
        assert_eq!(result.primary_transcript(), Some("primary"));
    }

    #[test]
    fn primary_transcript_no_channels() {
        assert_eq!(TranscriptResult::default().primary_transcript(), None);
    }

    #[test]
    fn primary_transcript_empty_first_channel() {
        let result = TranscriptResult {
            channels: vec![Channel::default()],
            summary: None,
            topics: Vec::new(),
        };
        assert_eq!(result.primary_transcript(), None);
    }

    #[test]
    fn payload_size_tracks_bytes() {
        let payload = AudioPayload {
            bytes: Bytes::from_static(b"12345"),
            mime_type: "audio/wav".into(),
            file_name: "clip.wav".into(),
        };
        assert_eq!(payload.size(), 5);
    }

    #[test]
    fn zero_verdict_is_empty() {
        let v = RelevanceVerdict::none();
        assert!(!v.is_relevant);
        assert!(v.keywords.is_empty());
        assert_eq!(v.relevance_score, 0);
    }

    #[test]
    fn empty_analysis_has_no_fields_set() {
        let a = AnalysisResult::empty();
        assert_eq!(a.transcript, "");
        assert!(a.summary.is_none());
        assert!(!a.is_relevant);
        assert_eq!(a.relevance_score, 0);
        assert!(a.keywords.is_empty());
        assert!(a.topics.is_empty());
    }
}
