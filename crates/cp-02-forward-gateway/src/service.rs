//! # Forward Gateway Service
//!
//! Builds the router and runs the HTTP server: the proxy entry path and
//! everything below it, a static index at `/`, and a health probe. The CORS
//! layer wraps the whole surface.

use crate::domain::config::GatewayConfig;
use crate::domain::error::GatewayError;
use crate::engine::ForwardEngine;
use crate::handler::{proxy_entrypoint, AppState};
use crate::middleware::CorsLayer;
use crate::ports::{BackendSource, UpstreamClient};
use axum::{
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Notify;
use tower::ServiceBuilder;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Forward gateway service state.
pub struct ForwardGatewayService {
    config: GatewayConfig,
    engine: Arc<ForwardEngine>,
    shutdown: Arc<Notify>,
}

impl ForwardGatewayService {
    /// Create a new gateway service over the given ports.
    pub fn new(
        config: GatewayConfig,
        backend: Arc<dyn BackendSource>,
        upstream: Arc<dyn UpstreamClient>,
    ) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        let engine = Arc::new(ForwardEngine::new(&config.forward, backend, upstream)?);

        Ok(Self {
            config,
            engine,
            shutdown: Arc::new(Notify::new()),
        })
    }

    /// Build the public router. Exposed so the test suite can drive the
    /// full surface without binding a socket.
    pub fn router(&self) -> Router {
        let state = AppState {
            engine: Arc::clone(&self.engine),
            entry_path: self.config.routes.entry_path.clone(),
        };
        let entry = &self.config.routes.entry_path;

        // Trace outermost so even locally answered preflights are logged.
        let middleware = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new());

        Router::new()
            .route(entry, any(proxy_entrypoint))
            .route(&format!("{entry}/*path"), any(proxy_entrypoint))
            .route("/health", get(health_check))
            .route_service("/", ServeFile::new(&self.config.routes.index_asset))
            .layer(middleware)
            .with_state(state)
    }

    /// Bind and serve until [`shutdown`](Self::shutdown) is triggered.
    pub async fn start(&self) -> Result<(), GatewayError> {
        let addr = self.config.http_addr();
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(e.to_string()))?;
        info!(addr = %addr, "forward gateway listening");

        let shutdown = Arc::clone(&self.shutdown);
        axum::serve(
            listener,
            self.router()
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown.notified().await;
        })
        .await
        .map_err(|e| GatewayError::Internal(e.to_string()))?;

        info!("forward gateway stopped");
        Ok(())
    }

    /// Trigger graceful shutdown. Safe to call before or after `start`; the
    /// signal is retained until the server observes it.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

/// Liveness probe.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
