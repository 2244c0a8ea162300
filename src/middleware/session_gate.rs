use crate::SESSION_COOKIE;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

pub const AUTH_PATH: &str = "/auth";
pub const HOME_PATH: &str = "/dashboard/users";

/// Which part of the site a request path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Exactly `/`
    Root,
    /// Anything starting with `/dashboard`
    Dashboard,
    /// Anything starting with `/auth`
    Auth,
    Other,
}

impl PathClass {
    pub fn classify(path: &str) -> Self {
        if path == "/" {
            PathClass::Root
        } else if path.starts_with("/dashboard") {
            PathClass::Dashboard
        } else if path.starts_with(AUTH_PATH) {
            PathClass::Auth
        } else {
            PathClass::Other
        }
    }
}

/// Whether the request carries a session token
///
/// Only presence is checked. The token is never validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Anonymous,
}

impl SessionState {
    /// An empty cookie value counts as no token at all.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(value) if !value.is_empty() => SessionState::Authenticated,
            _ => SessionState::Anonymous,
        }
    }
}

/// Path as the static file server will resolve it
///
/// Percent-decodes once, drops empty and `.` segments and resolves `..`, so
/// `/%64ashboard/users` and `//dashboard/./users` both become
/// `/dashboard/users`. Paths that don't decode to UTF-8 are left undecoded.
pub fn normalize_path(path: &str) -> String {
    let decoded = urlencoding::decode(path)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| path.to_string());

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    format!("/{}", segments.join("/"))
}

/// Where to send the request, or `None` to let it through
pub fn gate_decision(path: &str, session: SessionState) -> Option<&'static str> {
    use SessionState::*;

    match (PathClass::classify(path), session) {
        (PathClass::Root, Authenticated) => Some(HOME_PATH),
        (PathClass::Root, Anonymous) => Some(AUTH_PATH),
        (PathClass::Dashboard, Anonymous) => Some(AUTH_PATH),
        (PathClass::Auth, Authenticated) => Some(HOME_PATH),
        _ => None,
    }
}

/// Redirect requests based on the `session_token` cookie before routing.
pub async fn session_gate(jar: CookieJar, request: Request, next: Next) -> Response {
    let session = SessionState::from_token(jar.get(SESSION_COOKIE).map(|cookie| cookie.value()));
    let path = normalize_path(request.uri().path());

    match gate_decision(&path, session) {
        Some(target) => {
            tracing::debug!(%path, ?session, target, "Session gate redirect");
            // 303 See Other
            Redirect::to(target).into_response()
        }
        None => next.run(request).await,
    }
}
