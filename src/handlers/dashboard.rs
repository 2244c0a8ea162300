//! # Dashboard Data Handlers
//!
//! Server-side data loads for dashboard pages. The page shells come from the
//! static frontend build; these endpoints hand them their data.

use crate::api::CallContext;
use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// User list for the users page
///
/// ## Route
/// GET /dashboard/users/data
///
/// ## Authentication
/// Sits behind the session gate, so anonymous visitors are redirected to
/// `/auth` before reaching it. The backend call itself runs server-side and
/// carries only the API key.
///
/// ## Response
/// Whatever JSON the backend returns for `GET /users`. Backend failures come
/// back as `502` with `{"error": "<message>"}`.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let users = state.api.get("/users", &CallContext::Server).await?;

    Ok(Json(users))
}
