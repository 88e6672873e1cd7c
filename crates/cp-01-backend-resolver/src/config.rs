//! # Resolver Configuration
//!
//! Read endpoints, contract call identity, and cache TTL. Defaults match
//! the production deployment; override them per environment via the runtime
//! configuration file.

use crate::domain::ContractCallSpec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Ordered list of JSON-RPC read endpoints. Tried first to last within
    /// a resolution pass; the first endpoint publishing a non-empty domain
    /// wins.
    pub endpoints: Vec<String>,

    /// Registry contract address, `0x`-prefixed.
    pub contract_address: String,

    /// 4-byte selector of the domain read function, 8 hex characters.
    pub function_selector: String,

    /// Seconds a resolved domain is served from cache before the next
    /// request triggers a new resolution pass.
    pub cache_ttl_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoints: vec![
                "https://rpc.ankr.com/bsc".to_string(),
                "https://bsc-dataseed2.bnbchain.org".to_string(),
            ],
            contract_address: "0xe9d5f645f79fa60fca82b4e1d35832e43370feb0".to_string(),
            function_selector: "20965255".to_string(),
            cache_ttl_secs: 60,
        }
    }
}

impl ResolverConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }
        let address = self
            .contract_address
            .strip_prefix("0x")
            .ok_or_else(|| ConfigError::InvalidAddress(self.contract_address.clone()))?;
        if address.len() != 40 || !address.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidAddress(self.contract_address.clone()));
        }
        if self.function_selector.len() != 8
            || !self.function_selector.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ConfigError::InvalidSelector(self.function_selector.clone()));
        }
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::ZeroTtl);
        }
        Ok(())
    }

    /// The contract call this configuration identifies.
    pub fn call_spec(&self) -> ContractCallSpec {
        ContractCallSpec {
            contract_address: self.contract_address.clone(),
            function_selector: self.function_selector.clone(),
        }
    }

    /// Create a config for testing (local endpoint, production call spec).
    pub fn for_testing() -> Self {
        Self {
            endpoints: vec!["http://127.0.0.1:8545".to_string()],
            ..Self::default()
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The endpoint list is empty.
    #[error("at least one rpc endpoint is required")]
    NoEndpoints,

    /// The contract address is not a `0x`-prefixed 20-byte hex string.
    #[error("invalid contract address: {0}")]
    InvalidAddress(String),

    /// The selector is not 8 hex characters.
    #[error("invalid function selector: {0}")]
    InvalidSelector(String),

    /// A zero TTL would turn every request into a resolution pass.
    #[error("cache ttl cannot be 0")]
    ZeroTtl,
}
