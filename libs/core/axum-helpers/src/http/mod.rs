//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS origin enforcement and response headers
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, enforce_origin, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(&policy)?)
//!     .layer(axum::middleware::from_fn_with_state(Arc::new(policy), enforce_origin));
//! ```

pub mod cors;
pub mod security;

pub use cors::{create_cors_layer, enforce_origin};
pub use security::security_headers;
