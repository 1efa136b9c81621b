//! # earmark-settings
//!
//! Environment-sourced configuration for the Earmark service.
//!
//! There is no settings file: every value comes from the environment with
//! a compiled default. Malformed numeric values degrade to the default
//! with a warning rather than failing startup. The absence of the
//! provider API key is deliberately non-fatal — the service starts and
//! answers health checks, and transcription calls fail with a
//! distinguishable "not configured" error.
//!
//! | Variable              | Meaning                         | Default                    |
//! |-----------------------|---------------------------------|----------------------------|
//! | `DEEPGRAM_API_KEY`    | provider credential             | unset                      |
//! | `DEEPGRAM_BASE_URL`   | provider endpoint override      | `https://api.deepgram.com` |
//! | `TRANSCRIBE_LANGUAGE` | target language for the provider| `zh-CN`                    |
//! | `MAX_FILE_SIZE`       | upload cap in MiB               | `10`                       |
//! | `PORT`                | HTTP listen port                | `3000`                     |

#![deny(unsafe_code)]

/// Default provider endpoint.
const DEFAULT_BASE_URL: &str = "https://api.deepgram.com";

/// Default target language.
const DEFAULT_LANGUAGE: &str = "zh-CN";

/// Default upload cap in MiB.
const DEFAULT_MAX_FILE_SIZE_MIB: usize = 10;

/// Default listen port.
const DEFAULT_PORT: u16 = 3000;

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Provider API key; `None` leaves the gateway unconfigured.
    pub deepgram_api_key: Option<String>,
    /// Provider base URL.
    pub deepgram_base_url: String,
    /// Target language requested from the provider.
    pub language: String,
    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,
    /// HTTP listen port.
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            deepgram_api_key: None,
            deepgram_base_url: DEFAULT_BASE_URL.into(),
            language: DEFAULT_LANGUAGE.into(),
            max_upload_bytes: DEFAULT_MAX_FILE_SIZE_MIB * 1024 * 1024,
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an injected lookup function.
    ///
    /// Tests pass a closure over a map instead of mutating process-global
    /// environment variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let max_upload_bytes = match lookup("MAX_FILE_SIZE") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(mib) => mib * 1024 * 1024,
                Err(_) => {
                    tracing::warn!(value = %raw, "invalid MAX_FILE_SIZE, using default");
                    defaults.max_upload_bytes
                }
            },
            None => defaults.max_upload_bytes,
        };

        let port = match lookup("PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!(value = %raw, "invalid PORT, using default");
                    defaults.port
                }
            },
            None => defaults.port,
        };

        Self {
            deepgram_api_key: lookup("DEEPGRAM_API_KEY").filter(|k| !k.is_empty()),
            deepgram_base_url: lookup("DEEPGRAM_BASE_URL").unwrap_or(defaults.deepgram_base_url),
            language: lookup("TRANSCRIBE_LANGUAGE").unwrap_or(defaults.language),
            max_upload_bytes,
            port,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
