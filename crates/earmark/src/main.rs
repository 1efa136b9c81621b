//! Earmark service binary: load settings, build the router, serve.

use anyhow::Context;
use clap::Parser;
use earmark_server::{build_router, state::AppState};
use earmark_settings::Settings;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Audio transcription service with frontend-content relevance detection.
#[derive(Debug, Parser)]
#[command(name = "earmark", version)]
struct Args {
    /// Listen port (overrides the PORT environment variable).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut settings = Settings::from_env();
    if let Some(port) = args.port {
        settings.port = port;
    }

    if settings.deepgram_api_key.is_none() {
        warn!("DEEPGRAM_API_KEY not provided; transcription requests will fail until it is set");
    }

    let port = settings.port;
    let router = build_router(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;
    info!(port, "earmark listening");

    axum::serve(listener, router)
        .await
        .context("server terminated")?;
    Ok(())
}
