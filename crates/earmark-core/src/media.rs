//! Upload media-type allow-list.
//!
//! The service only forwards formats the transcription provider accepts.
//! Validation happens before the provider call so an unsupported upload
//! never costs a network round trip.

/// MIME types accepted for upload.
pub const SUPPORTED_MEDIA_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp3",
    "audio/wav",
    "audio/ogg",
    "audio/m4a",
    "audio/mp4",
    "audio/webm",
    "audio/flac",
    "video/mp4",
    "video/webm",
];

/// Whether `mime_type` is on the upload allow-list.
///
/// Exact match only; parameters such as `;codecs=opus` are not stripped,
/// matching the upstream validation this service replaces.
#[must_use]
pub fn is_supported_media_type(mime_type: &str) -> bool {
    SUPPORTED_MEDIA_TYPES.contains(&mime_type)
}
