//! Traits for result caching

use async_trait::async_trait;

use crate::registry::CalculationOutcome;
use crate::types::*;

/// Cache of evaluated calculator outcomes
///
/// The engine works with any backend (in-memory, Redis, a CDN edge store)
/// that implements these methods. Keys are the canonical JSON of a request.
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Fetch a fresh outcome, if one is cached
    async fn get(&self, key: &str) -> CalcResult<Option<CalculationOutcome>>;

    /// Store an outcome that expires after `ttl`
    ///
    /// An expiry past the representable date range is an error.
    async fn put(
        &mut self,
        key: &str,
        outcome: &CalculationOutcome,
        ttl: chrono::Duration,
    ) -> CalcResult<()>;

    /// Drop one entry; returns whether it was present
    async fn invalidate(&mut self, key: &str) -> CalcResult<bool>;

    /// Drop every entry
    async fn clear(&mut self) -> CalcResult<()>;
}
