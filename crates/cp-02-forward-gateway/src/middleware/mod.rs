//! # Middleware
//!
//! Tower layers applied in front of every route.

pub mod cors;

pub use cors::{apply_cors_headers, CorsLayer};
