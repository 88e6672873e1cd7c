//! # Node Configuration
//!
//! Unified configuration for both subsystems and runtime parameters.
//!
//! Sources, in order: the TOML file named by `CHAINPROXY_CONFIG` (or
//! `./chainproxy.toml` when present), then environment overrides for the
//! knobs that differ per deployment. Everything has a default; an absent
//! file is not an error, a malformed one is.

use anyhow::{Context, Result};
use cp_01_backend_resolver::ResolverConfig;
use cp_02_forward_gateway::GatewayConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete node configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Backend resolver configuration.
    pub resolver: ResolverConfig,
    /// Forward gateway configuration.
    pub gateway: GatewayConfig,
    /// Default log filter, overridden by `RUST_LOG`.
    pub log_filter: LogFilter,
}

/// Newtype so the filter default lives next to the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFilter(pub String);

impl Default for LogFilter {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl NodeConfig {
    /// Load configuration from file and environment.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) => Self::from_file(&path)
                .with_context(|| format!("reading config file {}", path.display()))?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).context("parsing TOML")
    }

    /// Environment overrides for per-deployment knobs.
    fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var("CHAINPROXY_PORT") {
            if let Ok(port) = port.parse() {
                self.gateway.http.port = port;
            }
        }
        if let Ok(endpoints) = std::env::var("CHAINPROXY_RPC_ENDPOINTS") {
            let endpoints: Vec<String> = endpoints
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !endpoints.is_empty() {
                self.resolver.endpoints = endpoints;
            }
        }
        if let Ok(filter) = std::env::var("CHAINPROXY_LOG") {
            self.log_filter = LogFilter(filter);
        }
    }

    /// Validate both subsystem configurations.
    pub fn validate(&self) -> Result<()> {
        self.resolver.validate().context("resolver configuration")?;
        self.gateway.validate().context("gateway configuration")?;
        Ok(())
    }
}

/// Resolve the config file location, if any.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("CHAINPROXY_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    let local = PathBuf::from("chainproxy.toml");
    local.exists().then_some(local)
}
