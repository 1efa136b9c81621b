//! # earmark-detect
//!
//! Keyword-based frontend-relevance scorer for transcripts.
//!
//! Two entry points:
//!
//! - [`detect`] — scan one transcript string against the fixed
//!   [`keywords::KEYWORDS`] list and produce a [`RelevanceVerdict`]
//! - [`analyze`] — full analysis of a [`TranscriptResult`]: primary
//!   transcript, summary extraction, and topic filtering
//!
//! The scorer is a pure substring scan with a linear score. No
//! tokenization, no stemming: a transcript matches a keyword when the
//! lowercased transcript contains the keyword as a substring.
//!
//! ## Crate Position
//!
//! Depends on earmark-core only. Depended on by: earmark-server.

#![deny(unsafe_code)]

pub mod keywords;

use earmark_core::types::{AnalysisResult, RelevanceVerdict, TranscriptResult};
use keywords::KEYWORDS;

/// Amplification factor applied to the raw match fraction.
///
/// Deliberate tuning carried over from the service this replaces: with a
/// ~150-entry list, roughly 30 matches saturate the score at 100. Do not
/// "fix" by removing the factor.
const SCORE_AMPLIFICATION: f64 = 5.0;

/// Scan `transcript` for frontend-technology keywords.
///
/// Matching is case-insensitive substring containment against every entry
/// of [`KEYWORDS`]. The score is
/// `min(100, round(|matched| / |KEYWORDS| * 100 * 5))` and the transcript
/// is relevant iff at least one keyword matched.
///
/// An empty transcript short-circuits to the zero verdict without
/// scanning.
#[must_use]
pub fn detect(transcript: &str) -> RelevanceVerdict {
    if transcript.is_empty() {
        return RelevanceVerdict::none();
    }

    let lowered = transcript.to_lowercase();
    let keywords: Vec<&'static str> = KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect();

    let relevance_score = score_for(keywords.len());
    let is_relevant = !keywords.is_empty();

    tracing::info!(
        score = relevance_score,
        matched = keywords.len(),
        "frontend relevance detection"
    );

    RelevanceVerdict {
        is_relevant,
        keywords,
        relevance_score,
    }
}

/// Compute the 0–100 relevance score for `matched` keyword hits.
fn score_for(matched: usize) -> u8 {
    let fraction = matched as f64 / KEYWORDS.len() as f64;
    (fraction * 100.0 * SCORE_AMPLIFICATION).round().min(100.0) as u8
}

/// Analyze a full transcription result for frontend relevance.
///
/// Uses the primary transcript only (first channel, first alternative —
/// a best-guess primary-track policy, not a merge across channels). A
/// result with no channels, or whose first channel has no alternatives,
/// yields [`AnalysisResult::empty`] rather than an error.
///
/// Topics are filtered with the same keyword list used for transcript
/// scanning: a topic survives iff its label contains any keyword
/// case-insensitively. Output topic order matches input order.
#[must_use]
pub fn analyze(result: &TranscriptResult) -> AnalysisResult {
    let Some(transcript) = result.primary_transcript() else {
        return AnalysisResult::empty();
    };

    let verdict = detect(transcript);

    let topics: Vec<String> = result
        .topics
        .iter()
        .filter(|t| is_relevant_topic(&t.topic))
        .map(|t| t.topic.clone())
        .collect();

    AnalysisResult {
        transcript: transcript.to_owned(),
        summary: result.summary.clone(),
        is_relevant: verdict.is_relevant,
        relevance_score: verdict.relevance_score,
        keywords: verdict.keywords,
        topics,
    }
}

/// Whether a provider-detected topic label passes the keyword filter.
#[must_use]
pub fn is_relevant_topic(topic: &str) -> bool {
    let lowered = topic.to_lowercase();
    KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
