//! # Application State
//!
//! Shared resources every request handler can reach through axum's `State`
//! extractor. Built once at startup from the validated [`Config`].

use crate::api::ApiClient;
use crate::config::Config;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state
///
/// Cloned for every request; both fields are cheap to clone (an `Arc` and a
/// client that shares its connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: Arc<Config>,

    /// Client for the backend API
    pub api: ApiClient,
}

impl AppState {
    /// Initialize application state
    ///
    /// # Errors
    /// Returns an error if the HTTP client can't be built (e.g. the TLS
    /// backend fails to initialize).
    pub fn new(config: &Config) -> Result<Self> {
        let api = ApiClient::new(&config.api)?;

        Ok(AppState {
            config: Arc::new(config.clone()),
            api,
        })
    }
}
