//! # earmark-core
//!
//! Foundation types for the Earmark transcription service.
//!
//! This crate provides the shared vocabulary the other Earmark crates
//! depend on:
//!
//! - **Payloads**: [`types::AudioPayload`] — one uploaded file, in memory,
//!   for the lifetime of one request
//! - **Transcripts**: [`types::TranscriptResult`] with its
//!   channel/alternative hierarchy and optional summary/topics
//! - **Verdicts**: [`types::RelevanceVerdict`] and [`types::AnalysisResult`]
//!   produced by the relevance scorer
//! - **Media types**: [`media::is_supported_media_type`] — the fixed upload
//!   allow-list enforced before any provider call
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other earmark crates.

#![deny(unsafe_code)]

pub mod media;
pub mod types;
