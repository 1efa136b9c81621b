//! # earmark-transcription
//!
//! Gateway client for the Deepgram prerecorded-transcription API.
//!
//! The service performs no speech recognition itself: audio bytes are
//! POSTed to the provider's `/v1/listen` endpoint with smart formatting,
//! diarization, utterances, topic detection, summarization, and entity
//! detection enabled, and the response is decoded into the shared
//! [`earmark_core::types::TranscriptResult`] shape.
//!
//! Failure is always explicit: a provider-side error surfaces as a
//! [`TranscriptionError`] carrying the provider's message, never as a
//! silent empty result. Calling the client without a configured API key
//! fails fast with [`TranscriptionError::NotConfigured`] before any
//! request is sent.
//!
//! ## Crate Position
//!
//! Depends on earmark-core. Depended on by: earmark-server.

#![deny(unsafe_code)]

pub mod client;
pub mod types;

pub use client::{DeepgramClient, DeepgramConfig};
pub use types::TranscriptionError;
