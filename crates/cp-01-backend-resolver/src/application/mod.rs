//! # Application Layer
//!
//! The resolver service orchestrating cache, endpoint fallback and decode.

pub mod service;

pub use service::BackendResolver;
