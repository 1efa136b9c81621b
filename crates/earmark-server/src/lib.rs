//! # earmark-server
//!
//! Axum HTTP surface and request orchestration for the Earmark service.
//!
//! Two routes:
//!
//! - `GET /health` — liveness probe
//! - `POST /transcription/audio` — multipart upload, transcribed via the
//!   provider gateway and scored by the keyword detector
//!
//! One request is one pipeline: validate the upload, await the provider
//! call, compute the verdict, shape the response. The only shared state
//! is the immutable [`state::AppState`] built once at startup.
//!
//! ## Crate Position
//!
//! Depends on all other earmark library crates. Depended on by the
//! `earmark` binary.

#![deny(unsafe_code)]

pub mod errors;
pub mod handlers;
pub mod service;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the service router.
///
/// The body limit comes from settings (`MAX_FILE_SIZE`); CORS is
/// permissive, matching the service this replaces.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.settings.max_upload_bytes;
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/transcription/audio",
            post(handlers::transcription::transcribe_audio),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
