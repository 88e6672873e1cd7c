//! # ChainProxy Runtime
//!
//! The main entry point for the proxy node.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (file, then environment overrides)
//! 2. Initialize tracing
//! 3. Validate configuration
//! 4. Wire the resolver (reqwest transport + system clock) into the gateway
//! 5. Serve until interrupted
//!
//! ## Wiring
//!
//! ```text
//! proxy-runtime
//!     ├── BackendResolver (cp-01)  ── HttpRpcTransport ──► read endpoints
//!     │        ▲
//!     │   OnChainBackendSource
//!     │        │
//!     └── ForwardGatewayService (cp-02) ── ReqwestUpstreamClient ──► backend
//! ```

mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cp_01_backend_resolver::{BackendResolver, HttpRpcTransport, SystemClock};
use cp_02_forward_gateway::{
    ForwardGatewayService, OnChainBackendSource, ReqwestUpstreamClient,
};

use crate::config::NodeConfig;

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::load().context("loading configuration")?;
    init_tracing(&config.log_filter.0);
    config.validate().context("validating configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.gateway.http_addr(),
        entry = %config.gateway.routes.entry_path,
        "starting chainproxy"
    );

    // Shared HTTP client pool for both the contract reads and the forward hop.
    let http_client = reqwest::Client::new();

    let resolver = Arc::new(BackendResolver::new(
        config.resolver.clone(),
        Arc::new(HttpRpcTransport::with_client(http_client.clone())),
        Arc::new(SystemClock),
    ));
    let backend = Arc::new(OnChainBackendSource::new(resolver));
    let upstream = Arc::new(ReqwestUpstreamClient::with_client(http_client));

    let service = Arc::new(
        ForwardGatewayService::new(config.gateway.clone(), backend, upstream)
            .context("building gateway")?,
    );

    let signal_target = Arc::clone(&service);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            signal_target.shutdown();
        }
    });

    service.start().await.context("gateway server")?;

    info!("chainproxy stopped");
    Ok(())
}
