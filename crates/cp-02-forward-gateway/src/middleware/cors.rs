//! # CORS Layer
//!
//! Sets the fixed CORS headers on every response and answers preflight
//! locally. `OPTIONS` short-circuits with an empty 204 before the resolver
//! or upstream is ever touched.
//!
//! Hand-written rather than `tower_http::cors` because the wire behavior is
//! pinned: always the same four headers, preflight status exactly 204.

use axum::{
    body::Body,
    http::{header::HeaderValue, HeaderMap, Method, Request, StatusCode},
    response::Response,
};
use std::future::Future;
use std::pin::Pin;
use tower::{Layer, Service};

/// Allowed methods as advertised on preflight.
const ALLOW_METHODS: &str = "GET, HEAD, POST, PUT, PATCH, DELETE, OPTIONS";

/// Preflight cache duration in seconds.
const MAX_AGE: &str = "3600";

/// Set the four unconditional CORS headers.
pub fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        "access-control-allow-origin",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("*"),
    );
    headers.insert(
        "access-control-max-age",
        HeaderValue::from_static(MAX_AGE),
    );
}

/// CORS layer
#[derive(Clone, Debug, Default)]
pub struct CorsLayer;

impl CorsLayer {
    /// Create the layer.
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsService { inner }
    }
}

/// CORS service
#[derive(Clone)]
pub struct CorsService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for CorsService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();

        Box::pin(async move {
            if req.method() == Method::OPTIONS {
                let mut response = Response::new(Body::empty());
                *response.status_mut() = StatusCode::NO_CONTENT;
                apply_cors_headers(response.headers_mut());
                return Ok(response);
            }

            let mut response = inner.call(req).await?;
            apply_cors_headers(response.headers_mut());
            Ok(response)
        })
    }
}
