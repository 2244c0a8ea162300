//! # Retail Web Gate
//!
//! Server-side pieces of the retail management web frontend:
//! - a session gate that redirects browsers based on the `session_token` cookie
//! - an API client that calls the backend with the API key and, from the
//!   browser, the session token as a bearer credential

pub mod api;        // Backend API client
pub mod config;     // Configuration management (environment variables)
pub mod error;      // Error type and HTTP error responses
pub mod handlers;   // HTTP request handlers (routes)
pub mod middleware; // Session gate
pub mod state;      // Shared application state

use crate::handlers::{dashboard::list_users, health::health_check};
use crate::state::AppState;
use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Cookie holding the opaque session token set by the login flow
pub const SESSION_COOKIE: &str = "session_token";

/// Build the application router
///
/// The session gate wraps every route, the static fallback included, so it
/// runs before any handler or file lookup.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health_check))
        .route("/dashboard/users/data", get(list_users))
        // Pre-built frontend pages and assets
        .fallback_service(static_files)
        .layer(axum_middleware::from_fn(middleware::session_gate::session_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
