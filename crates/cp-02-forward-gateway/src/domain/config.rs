//! # Gateway Configuration
//!
//! Bind address, forwarding knobs, and route layout, with validation.

use http::header::HeaderName;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Main gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration.
    pub http: HttpConfig,
    /// Forwarding configuration.
    pub forward: ForwardConfig,
    /// Route layout.
    pub routes: RouteConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            forward: ForwardConfig::default(),
            routes: RouteConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let entry = &self.routes.entry_path;
        if !entry.starts_with('/') || entry.len() < 2 || entry.ends_with('/') {
            return Err(ConfigError::InvalidEntryPath(entry.clone()));
        }
        if HeaderName::from_bytes(self.forward.client_ip_header.as_bytes()).is_err() {
            return Err(ConfigError::InvalidClientIpHeader(
                self.forward.client_ip_header.clone(),
            ));
        }
        Ok(())
    }

    /// Get the HTTP server bind address.
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Create a config for testing (ephemeral port).
    pub fn for_testing() -> Self {
        Self {
            http: HttpConfig {
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 0,
            },
            ..Self::default()
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

/// Forwarding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardConfig {
    /// Name of the outbound header carrying the caller's resolved IP. The
    /// deliberately unremarkable default matches what the deployed backend
    /// expects; any name works as long as both sides agree.
    pub client_ip_header: String,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            client_ip_header: "x-dfkjldifjlifjd".to_string(),
        }
    }
}

/// Route layout: where the proxy is mounted and what the root serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Public entry path. The proxy answers on this path and everything
    /// below it.
    pub entry_path: String,
    /// Static asset served at `/`.
    pub index_asset: PathBuf,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            entry_path: "/secureproxy.php".to_string(),
            index_asset: PathBuf::from("static/index.html"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Entry path must be absolute, non-root, without a trailing slash.
    #[error("invalid entry path: {0}")]
    InvalidEntryPath(String),

    /// The client-IP header name is not a valid HTTP header name.
    #[error("invalid client ip header name: {0}")]
    InvalidClientIpHeader(String),
}
