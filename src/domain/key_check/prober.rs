use async_trait::async_trait;
use std::fmt::Debug;

use super::ProbeResult;
use crate::domain::DomainError;

/// Trait for remote key probes (Gemini, mocks)
///
/// Every remote outcome, including rejections and transport failures, is
/// reported as `Ok`. `Err` is reserved for faults inside the probe itself.
#[async_trait]
pub trait KeyProber: Send + Sync + Debug {
    /// Validate a single candidate key against the remote API
    async fn probe(&self, key: &str) -> Result<ProbeResult, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
