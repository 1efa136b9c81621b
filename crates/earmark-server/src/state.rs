//! Shared application state.

use std::sync::Arc;

use earmark_settings::Settings;
use earmark_transcription::{DeepgramClient, DeepgramConfig};

/// State shared by all request handlers.
///
/// Built once at startup and cloned per request; everything inside is
/// read-only after construction, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Resolved service configuration.
    pub settings: Arc<Settings>,
    /// Provider gateway client.
    pub gateway: Arc<DeepgramClient>,
}

impl AppState {
    /// Build state from settings, constructing the gateway client.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let gateway = DeepgramClient::new(DeepgramConfig {
            api_key: settings.deepgram_api_key.clone(),
            base_url: settings.deepgram_base_url.clone(),
            language: settings.language.clone(),
        });
        Self {
            settings: Arc::new(settings),
            gateway: Arc::new(gateway),
        }
    }
}
