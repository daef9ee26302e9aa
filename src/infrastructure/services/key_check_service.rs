//! Key check service - concurrent fan-out of key probes

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::domain::{DomainError, KeyBatch, KeyProber, ProbeResult};
use crate::infrastructure::observability::{record_key_batch, record_probe_outcome};

/// Validates every key of a batch with its own probe task
#[derive(Debug, Clone)]
pub struct KeyCheckService {
    prober: Arc<dyn KeyProber>,
}

impl KeyCheckService {
    pub fn new(prober: Arc<dyn KeyProber>) -> Self {
        Self { prober }
    }

    /// Probe all keys concurrently and return one result per key, in input order.
    ///
    /// Every probe runs to completion. A probe that errors or panics yields
    /// `ProbeResult::internal_fault()` at its position.
    pub async fn validate_keys(&self, batch: KeyBatch) -> Vec<ProbeResult> {
        info!(
            count = batch.len(),
            provider = self.prober.provider_name(),
            "Received key check request"
        );
        record_key_batch(batch.len());

        let handles: Vec<Option<JoinHandle<Result<ProbeResult, DomainError>>>> = batch
            .into_entries()
            .into_iter()
            .map(|entry| entry.map(|key| self.spawn_probe(key)))
            .collect();

        let mut results = Vec::with_capacity(handles.len());

        for (position, handle) in handles.into_iter().enumerate() {
            let result = match handle {
                Some(handle) => Self::join_probe(position, handle).await,
                None => {
                    warn!(position, "Key entry is not a string");
                    ProbeResult::internal_fault()
                }
            };

            record_probe_outcome(result.outcome());
            results.push(result);
        }

        results
    }

    fn spawn_probe(&self, key: String) -> JoinHandle<Result<ProbeResult, DomainError>> {
        let prober = Arc::clone(&self.prober);

        tokio::spawn(async move { prober.probe(&key).await })
    }

    async fn join_probe(
        position: usize,
        handle: JoinHandle<Result<ProbeResult, DomainError>>,
    ) -> ProbeResult {
        match handle.await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                error!(position, error = %e, "Key probe failed unexpectedly");
                ProbeResult::internal_fault()
            }
            Err(e) => {
                error!(position, error = %e, "Key probe task aborted");
                ProbeResult::internal_fault()
            }
        }
    }
}
