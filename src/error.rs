//! # Error Handling
//!
//! This module defines the application error type and how it turns into an
//! HTTP response when a handler fails.
//!
//! Unauthenticated access is deliberately absent here: the session gate
//! resolves it with a redirect, never with an error value.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-wide error type
///
/// `#[from]` lets the `?` operator convert transport and serialization errors
/// automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// The backend answered with a non-success status
    ///
    /// Carries either the backend's `message` field or the status text.
    /// The display form is the message itself, nothing prepended.
    #[error("{0}")]
    Api(String),

    /// The request never got a response (connection refused, bad body, ...)
    ///
    /// Passed through from reqwest untouched.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A caller-supplied header name or value that HTTP can't carry
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Api(message) => {
                tracing::warn!("Backend API error: {}", message);
                (StatusCode::BAD_GATEWAY, message.clone())
            }
            AppError::Http(e) => {
                tracing::error!("Backend unreachable: {:?}", e);
                (StatusCode::BAD_GATEWAY, "Backend unavailable".to_string())
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Serialization error".to_string())
            }
            AppError::InvalidHeader(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        // Format: { "error": "error message here" }
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
