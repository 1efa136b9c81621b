//! Liveness probe.

use axum::Json;
use serde_json::{Value, json};

/// `GET /health` — static liveness response.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "earmark transcription service is running",
    }))
}
