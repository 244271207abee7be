//! System handlers

use axum::response::Json;
use serde_json::{json, Value};

/// Handler for GET / - Welcome message
pub async fn welcome() -> &'static str {
    "Welcome to myFlix! Go to /documentation.html to view the API documentation."
}

/// Handler for GET /health - Health check
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}
