//! # Health Check Handler
//!
//! Simple endpoint to check if the server is running.

use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// {
///   "status": "healthy",
///   "service": "retail-web-gate"
/// }
/// ```
///
/// Never touches the backend, so it stays green while the API is down.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "retail-web-gate"
    }))
}
