//! # Backend API Client
//!
//! Helpers used by page and component code to call the backend over HTTP.
//!
//! ## Submodules
//! - `cookie`: pulling a single cookie value out of a browser cookie string
//! - `types`: the call context and per-request options
//! - `client`: the client itself (header assembly, request, error normalization)
//!
//! ## Outbound contract
//! Every request carries `Content-Type: application/json` and `x-api-key`.
//! When the call runs with browser cookies available and a `session_token`
//! cookie is set, `Authorization: Bearer <token>` is added as well.

pub mod client;
pub mod cookie;
pub mod types;

pub use client::ApiClient;
pub use types::{CallContext, RequestOptions};
