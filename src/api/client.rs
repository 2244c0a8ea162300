//! # API Client
//!
//! Calls the backend with the shared outbound headers and turns non-success
//! responses into a single [`AppError::Api`] carrying a readable message.

use crate::api::types::{CallContext, RequestOptions};
use crate::config::ApiConfig;
use crate::error::{AppError, AppResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{json, Value};

const API_KEY_HEADER: &str = "x-api-key";

/// Authenticated JSON client for the backend API
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection pool.
/// No timeout is configured, a hung backend holds the caller until the
/// transport gives up.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// Assemble outbound headers
    ///
    /// Order matters: defaults first, then caller headers (which win on
    /// conflict), then the bearer token when the context provides one.
    pub fn build_headers(
        &self,
        options: &RequestOptions,
        context: &CallContext,
    ) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            header_value(API_KEY_HEADER, &self.config.api_key)?,
        );

        for (name, value) in &options.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AppError::InvalidHeader(format!("'{name}' is not a valid header name")))?;
            headers.insert(header_name, header_value(name, value)?);
        }

        if let Some(token) = context.session_token() {
            headers.insert(AUTHORIZATION, header_value("authorization", &format!("Bearer {token}"))?);
        }

        Ok(headers)
    }

    /// Call `<base_url><endpoint>` and return the JSON response
    ///
    /// # Errors
    /// - `AppError::Api` when the backend answers with a non-success status.
    ///   The message is the body's `message` field, or the status text when the
    ///   body has none (or isn't JSON at all).
    /// - `AppError::Http` when the request fails at the transport level, or a
    ///   success response isn't valid JSON.
    pub async fn fetch(
        &self,
        endpoint: &str,
        options: RequestOptions,
        context: &CallContext,
    ) -> AppResult<Value> {
        let url = self.config.endpoint_url(endpoint);
        let headers = self.build_headers(&options, context)?;
        let RequestOptions { method, body, .. } = options;

        tracing::debug!(%method, %url, "Calling backend API");

        let mut request = self.http.request(method, url.as_str()).headers(headers);
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_body: Value = response.json().await.unwrap_or_else(|_| json!({}));
            let message = error_message(&error_body, status);
            tracing::warn!(%status, %url, "Backend API error: {}", message);
            return Err(AppError::Api(message));
        }

        Ok(response.json().await?)
    }

    pub async fn get(&self, endpoint: &str, context: &CallContext) -> AppResult<Value> {
        self.fetch(endpoint, RequestOptions::new(), context).await
    }

    pub async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
        context: &CallContext,
    ) -> AppResult<Value> {
        let options = RequestOptions::new()
            .method(reqwest::Method::POST)
            .json(body)?;
        self.fetch(endpoint, options, context).await
    }
}

// Header values may carry credentials; only the name goes into the error.
fn header_value(name: &str, value: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| AppError::InvalidHeader(format!("value for '{name}' is not a valid header value")))
}

/// Backend `message` when it's a non-empty string, a non-zero number or
/// `true`; the status text otherwise.
fn error_message(body: &Value, status: StatusCode) -> String {
    let backend_message = match body.get("message") {
        Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
        Some(Value::Number(number)) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        _ => None,
    };

    backend_message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| status.as_str().to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = ApiConfig::new("http://localhost:3000".into(), "test-key".into()).unwrap();
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn default_headers_without_session() {
        let headers = client()
            .build_headers(&RequestOptions::new(), &CallContext::Server)
            .unwrap();

        assert_eq!(headers["content-type"], "application/json");
        assert_eq!(headers["x-api-key"], "test-key");
        assert!(!headers.contains_key("authorization"));
    }

    #[test]
    fn caller_headers_override_defaults_case_insensitively() {
        let options = RequestOptions::new()
            .header("Content-Type", "text/plain")
            .header("X-Api-Key", "other-key")
            .header("x-store-id", "7");
        let headers = client().build_headers(&options, &CallContext::Server).unwrap();

        assert_eq!(headers["content-type"], "text/plain");
        assert_eq!(headers["x-api-key"], "other-key");
        assert_eq!(headers["x-store-id"], "7");
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn browser_session_adds_bearer_token_last() {
        let options = RequestOptions::new().header("Authorization", "Basic Zm9vOmJhcg==");
        let context = CallContext::browser("a=1; session_token=abc123; b=2");
        let headers = client().build_headers(&options, &context).unwrap();

        assert_eq!(headers["authorization"], "Bearer abc123");
    }

    #[test]
    fn browser_without_session_cookie_has_no_bearer() {
        let context = CallContext::browser("theme=dark");
        let headers = client().build_headers(&RequestOptions::new(), &context).unwrap();

        assert!(!headers.contains_key("authorization"));
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let options = RequestOptions::new().header("bad header", "x");
        let err = client().build_headers(&options, &CallContext::Server).unwrap_err();

        assert!(matches!(err, AppError::InvalidHeader(_)));
    }

    #[test]
    fn invalid_header_value_does_not_leak_value() {
        let options = RequestOptions::new().header("x-secret", "line\nbreak");
        let err = client().build_headers(&options, &CallContext::Server).unwrap_err();

        assert!(err.to_string().contains("x-secret"));
        assert!(!err.to_string().contains("line"));
    }

    #[test]
    fn error_message_prefers_backend_message() {
        let body = json!({ "message": "not found" });
        assert_eq!(error_message(&body, StatusCode::NOT_FOUND), "not found");
    }

    #[test]
    fn error_message_falls_back_to_status_text() {
        assert_eq!(error_message(&json!({}), StatusCode::INTERNAL_SERVER_ERROR), "Internal Server Error");
        assert_eq!(error_message(&json!({ "message": "" }), StatusCode::BAD_REQUEST), "Bad Request");
        assert_eq!(error_message(&json!({ "message": 0 }), StatusCode::CONFLICT), "Conflict");
        assert_eq!(error_message(&json!({ "message": null }), StatusCode::CONFLICT), "Conflict");
        assert_eq!(error_message(&json!({ "message": false }), StatusCode::CONFLICT), "Conflict");
        assert_eq!(error_message(&json!([1, 2]), StatusCode::FORBIDDEN), "Forbidden");
    }

    #[test]
    fn error_message_stringifies_scalar_backend_message() {
        assert_eq!(error_message(&json!({ "message": 42 }), StatusCode::CONFLICT), "42");
        assert_eq!(error_message(&json!({ "message": 1.5 }), StatusCode::CONFLICT), "1.5");
        assert_eq!(error_message(&json!({ "message": true }), StatusCode::CONFLICT), "true");
    }
}
