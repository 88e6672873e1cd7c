//! # Adapters
//!
//! Production implementations of the outbound ports.

pub mod reqwest_client;
pub mod resolver;

pub use reqwest_client::ReqwestUpstreamClient;
pub use resolver::OnChainBackendSource;
