//! # Backend Resolver Service
//!
//! Owns the single process-wide cache slot and runs the resolution pass:
//! serve fresh cache, otherwise walk the endpoint list in order and accept
//! the first non-empty decoded domain.

use crate::algorithms::decode_abi_string;
use crate::config::ResolverConfig;
use crate::domain::{ContractCallSpec, JsonRpcRequest, ResolveError, ResolvedBackend};
use crate::ports::{Clock, RpcTransport};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves the current backend domain from contract storage, with a TTL
/// cache in front.
///
/// Concurrency: the cache is one `RwLock`-guarded slot. Concurrent callers
/// that observe an expired entry each run their own resolution pass and
/// overwrite the slot with equivalent data; the races are benign and the
/// upstream load stays bounded by the TTL. A resolution in progress does not
/// serve the previous value - callers block on their own pass until it
/// completes or fails.
pub struct BackendResolver {
    call_spec: ContractCallSpec,
    endpoints: Vec<String>,
    ttl_millis: u64,
    cache: RwLock<Option<ResolvedBackend>>,
    transport: Arc<dyn RpcTransport>,
    clock: Arc<dyn Clock>,
}

impl BackendResolver {
    /// Create a resolver from validated configuration.
    pub fn new(
        config: ResolverConfig,
        transport: Arc<dyn RpcTransport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            call_spec: config.call_spec(),
            ttl_millis: config.cache_ttl_secs * 1_000,
            endpoints: config.endpoints,
            cache: RwLock::new(None),
            transport,
            clock,
        }
    }

    /// Current backend domain: cached if fresh, otherwise freshly resolved.
    ///
    /// Fails with [`ResolveError::NoDomainAvailable`] when every endpoint
    /// fails or publishes an empty value. A stale cache entry is not a
    /// fallback; the failure is surfaced to the caller.
    pub async fn resolve(&self) -> Result<String, ResolveError> {
        let now = self.clock.now_millis();
        if let Some(domain) = self.cached_if_fresh(now) {
            return Ok(domain);
        }
        self.resolve_uncached().await
    }

    /// The cached domain when the entry is younger than the TTL.
    fn cached_if_fresh(&self, now_millis: u64) -> Option<String> {
        let cache = self.cache.read();
        cache
            .as_ref()
            .filter(|entry| entry.is_fresh(now_millis, self.ttl_millis))
            .map(|entry| entry.domain.clone())
    }

    /// One full resolution pass over the endpoint list, in configured order.
    async fn resolve_uncached(&self) -> Result<String, ResolveError> {
        let request = JsonRpcRequest::eth_call(&self.call_spec);

        for endpoint in &self.endpoints {
            let payload = match self.transport.execute(endpoint, &request).await {
                Ok(response) => match response.into_result() {
                    Ok(payload) => payload,
                    Err(e) => {
                        warn!(endpoint = %endpoint, error = %e, "endpoint returned rpc error");
                        continue;
                    }
                },
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "endpoint unreachable");
                    continue;
                }
            };

            let domain = match decode_abi_string(&payload) {
                Ok(domain) => domain,
                Err(e) => {
                    warn!(endpoint = %endpoint, error = %e, "undecodable call result");
                    continue;
                }
            };

            if domain.is_empty() {
                debug!(endpoint = %endpoint, "endpoint published empty domain");
                continue;
            }

            let now = self.clock.now_millis();
            *self.cache.write() = Some(ResolvedBackend {
                domain: domain.clone(),
                resolved_at_millis: now,
            });
            info!(endpoint = %endpoint, domain = %domain, "backend domain refreshed");
            return Ok(domain);
        }

        warn!("no endpoint yielded a backend domain");
        Err(ResolveError::NoDomainAvailable)
    }
}
