use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe with the service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "HR Platform API is running successfully!" }))
}

/// GET /api/test
pub async fn test_handler() -> Json<Value> {
    Json(json!({ "data": "This is a test endpoint", "success": true }))
}
