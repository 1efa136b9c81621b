//! Error types for the transcription gateway.

/// Errors that can occur when delegating transcription to the provider.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// No provider API key is configured. No request was sent.
    #[error("transcription provider is not configured (missing API key)")]
    NotConfigured,

    /// The provider answered with a non-success status.
    #[error("transcription provider returned {status}: {message}")]
    Provider {
        /// HTTP status code from the provider.
        status: u16,
        /// Response body text, typically the provider's error message.
        message: String,
    },

    /// The request never completed (connect, DNS, TLS, timeout).
    #[error("transcription request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered 2xx but the body did not match the
    /// expected shape.
    #[error("unexpected transcription response: {0}")]
    InvalidResponse(String),
}

impl TranscriptionError {
    /// Whether this error means the service is missing credentials
    /// rather than the provider having failed.
    #[must_use]
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display_includes_status_and_message() {
        let e = TranscriptionError::Provider {
            status: 401,
            message: "Invalid credentials".into(),
        };
        let text = e.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Invalid credentials"));
    }

    #[test]
    fn not_configured_is_distinguishable() {
        assert!(TranscriptionError::NotConfigured.is_not_configured());
        let provider = TranscriptionError::Provider {
            status: 500,
            message: String::new(),
        };
        assert!(!provider.is_not_configured());
    }

    #[test]
    fn invalid_response_display_carries_detail() {
        let e = TranscriptionError::InvalidResponse("missing field `results`".into());
        assert!(e.to_string().contains("missing field `results`"));
    }
}
