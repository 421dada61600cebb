use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Answers without touching the engine.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
