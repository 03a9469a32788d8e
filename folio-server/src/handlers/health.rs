use axum::Json;
use serde_json::{Value, json};

/// Liveness probe. Does not touch the CMS.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
