//! # Middleware Module
//!
//! Middleware intercepts HTTP requests before they reach a route handler.
//!
//! ## Our Middleware
//! - `session_gate`: sends visitors to the login page or the dashboard
//!   depending on whether they carry a `session_token` cookie

pub mod session_gate;
