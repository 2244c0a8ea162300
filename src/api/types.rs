//! # API Client Types
//!
//! What a caller hands to [`ApiClient::fetch`](super::ApiClient::fetch) besides
//! the endpoint: where the call runs, and how the request should look.

use crate::api::cookie::get_cookie;
use crate::error::AppResult;
use crate::SESSION_COOKIE;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Where an API call is being made from
///
/// Only a browser has the user's cookies, so only a browser call can attach
/// the session token as a bearer credential. Server-side calls go out with the
/// API key alone.
#[derive(Debug, Clone, Default)]
pub enum CallContext {
    /// Running on the server; no cookie-derived credential is available
    #[default]
    Server,

    /// Running in the browser with access to its cookie string
    Browser {
        /// The raw `document.cookie` value, e.g. `"a=1; session_token=abc"`
        cookies: String,
    },
}

impl CallContext {
    /// Browser context over the given cookie string
    pub fn browser(cookies: impl Into<String>) -> Self {
        CallContext::Browser {
            cookies: cookies.into(),
        }
    }

    /// The session token to send as a bearer credential, if there is one
    pub fn session_token(&self) -> Option<String> {
        match self {
            CallContext::Server => None,
            CallContext::Browser { cookies } => get_cookie(cookies, SESSION_COOKIE),
        }
    }
}

/// Per-request options
///
/// Defaults to a plain `GET` with no extra headers and no body.
///
/// ## Example
/// ```rust,ignore
/// let options = RequestOptions::new()
///     .method(Method::POST)
///     .header("x-store-id", "42")
///     .json(&new_product)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,

    /// Extra headers, applied in order over the defaults
    /// A later entry with the same name replaces an earlier one.
    pub headers: Vec<(String, String)>,

    /// JSON body, sent as-is
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body
    ///
    /// # Errors
    /// Fails if `body` can't be represented as JSON.
    pub fn json<T: Serialize>(mut self, body: &T) -> AppResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}
