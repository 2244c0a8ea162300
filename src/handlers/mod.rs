//! # HTTP Request Handlers
//!
//! Route handlers that sit behind the session gate.
//!
//! ## Submodules
//! - `health`: Health check endpoint (for monitoring)
//! - `dashboard`: Server-side data loads for dashboard pages

pub mod dashboard;
pub mod health;
