//! # On-Chain Backend Source
//!
//! Adapter connecting the gateway to the cp-01 resolver.

use crate::ports::BackendSource;
use async_trait::async_trait;
use cp_01_backend_resolver::{BackendResolver, ResolveError};
use std::sync::Arc;

/// [`BackendSource`] backed by the on-chain [`BackendResolver`].
pub struct OnChainBackendSource {
    inner: Arc<BackendResolver>,
}

impl OnChainBackendSource {
    /// Wrap a resolver instance.
    pub fn new(inner: Arc<BackendResolver>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl BackendSource for OnChainBackendSource {
    async fn resolve(&self) -> Result<String, ResolveError> {
        self.inner.resolve().await
    }
}
