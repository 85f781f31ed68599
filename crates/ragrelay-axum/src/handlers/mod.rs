//! HTTP handlers for both services.

pub mod generate;
pub mod rag;

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe shared by both services.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
