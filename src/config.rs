//! # Configuration Management
//!
//! This module loads configuration from environment variables once at startup.
//! The resulting [`Config`] is validated up front and then handed to the rest of
//! the application by reference, so nothing else reads the environment.
//!
//! ## Environment Variables
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8080)
//! - `STATIC_DIR`: Directory with the built frontend assets (default: build)
//! - `PUBLIC_API_URL`: Base URL of the backend API (required)
//! - `PUBLIC_API_KEY`: Static key sent as `x-api-key` to the backend (required)

use anyhow::{bail, Context, Result};
use std::env;
use std::fmt;
use url::Url;

/// Application configuration
///
/// Holds everything the server needs to run. All fields are public so tests
/// can build a `Config` directly without touching the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number
    pub port: u16,

    /// Directory holding the pre-built frontend
    /// Any path without a dedicated handler is served from here.
    pub static_dir: String,

    /// Backend API settings used by the API client
    pub api: ApiConfig,
}

/// Settings for reaching the backend API
///
/// `base_url` is kept exactly as configured: endpoints are appended to it
/// verbatim, so `https://api.example.com` + `/users` becomes
/// `https://api.example.com/users`.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint is appended to
    pub base_url: String,

    /// Static API key attached to every outbound request
    pub api_key: String,
}

// The key is a credential, keep it out of logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads variables from a .env file (if present) using dotenvy
    /// 2. Reads each value, falling back to defaults for the server settings
    /// 3. Validates the backend settings, which have no defaults
    ///
    /// ## Example .env file
    /// ```text
    /// HOST=127.0.0.1
    /// PORT=8080
    /// STATIC_DIR=build
    /// PUBLIC_API_URL=http://localhost:3000/api
    /// PUBLIC_API_KEY=dev-key
    /// ```
    pub fn from_env() -> Result<Self> {
        // dotenvy doesn't error if the file is missing
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let api = ApiConfig::new(
            required("PUBLIC_API_URL")?,
            required("PUBLIC_API_KEY")?,
        )?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "build".to_string()),
            api,
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Example: "127.0.0.1:8080"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ApiConfig {
    /// Build and validate backend settings
    ///
    /// # Errors
    /// Returns an error if the base URL is not an absolute http(s) URL or the
    /// API key is blank.
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let parsed = Url::parse(&base_url)
            .with_context(|| format!("PUBLIC_API_URL is not a valid URL: {base_url}"))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("PUBLIC_API_URL must use http or https, got {}", parsed.scheme());
        }

        if api_key.trim().is_empty() {
            bail!("PUBLIC_API_KEY must not be empty");
        }

        Ok(ApiConfig { base_url, api_key })
    }

    /// Full URL for an endpoint, built by plain concatenation
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_base_urls() {
        assert!(ApiConfig::new("http://localhost:3000".into(), "k".into()).is_ok());
        assert!(ApiConfig::new("https://api.example.com/v1".into(), "k".into()).is_ok());
    }

    #[test]
    fn rejects_invalid_base_urls() {
        assert!(ApiConfig::new("not a url".into(), "k".into()).is_err());
        assert!(ApiConfig::new("/relative/path".into(), "k".into()).is_err());
        assert!(ApiConfig::new("ftp://files.example.com".into(), "k".into()).is_err());
    }

    #[test]
    fn rejects_blank_api_key() {
        let err = ApiConfig::new("http://localhost:3000".into(), "  ".into()).unwrap_err();
        assert!(err.to_string().contains("PUBLIC_API_KEY"));
    }

    #[test]
    fn endpoint_url_is_plain_concatenation() {
        let api = ApiConfig::new("http://localhost:3000/api".into(), "k".into()).unwrap();
        assert_eq!(api.endpoint_url("/users"), "http://localhost:3000/api/users");
        assert_eq!(api.endpoint_url("users"), "http://localhost:3000/apiusers");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let api = ApiConfig::new("http://localhost:3000".into(), "super-secret".into()).unwrap();
        let printed = format!("{api:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config {
            host: "0.0.0.0".into(),
            port: 9000,
            static_dir: "build".into(),
            api: ApiConfig::new("http://localhost:3000".into(), "k".into()).unwrap(),
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
