//! Calculator engine that puts a result cache in front of [`evaluate`]

use crate::config::EngineConfig;
use crate::format::Formatter;
use crate::registry::{evaluate, CalculationOutcome, CalculationRequest};
use crate::traits::*;
use crate::types::*;

/// Main entry point: evaluates requests and caches their outcomes
pub struct CalculatorEngine<C: ResultCache> {
    config: EngineConfig,
    cache: C,
    formatter: Formatter,
}

impl<C: ResultCache> CalculatorEngine<C> {
    /// Create an engine with the default configuration
    pub fn new(cache: C) -> Self {
        Self::with_config(EngineConfig::default(), cache)
    }

    pub fn with_config(config: EngineConfig, cache: C) -> Self {
        let formatter = Formatter::new(config.format.clone());
        Self {
            config,
            cache,
            formatter,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Formatter using the configured symbols
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Evaluate a request, serving a fresh cached outcome when there is one
    pub async fn calculate(
        &mut self,
        request: &CalculationRequest,
    ) -> CalcResult<CalculationOutcome> {
        let key = request.cache_key()?;

        if let Some(outcome) = self.cache.get(&key).await? {
            tracing::debug!(calculator = %request.kind(), "cache hit");
            return Ok(outcome);
        }

        tracing::debug!(calculator = %request.kind(), "cache miss");
        let outcome = evaluate(&self.config, request)?;
        let ttl = self.config.cache.ttl()?;
        self.cache.put(&key, &outcome, ttl).await?;

        Ok(outcome)
    }

    /// Parse a JSON request and calculate it
    pub async fn calculate_json(&mut self, json: &str) -> CalcResult<CalculationOutcome> {
        let request = CalculationRequest::from_json(json)?;
        self.calculate(&request).await
    }

    /// Evaluate without touching the cache
    pub fn evaluate(&self, request: &CalculationRequest) -> CalcResult<CalculationOutcome> {
        evaluate(&self.config, request)
    }

    /// Drop the cached outcome of one request
    pub async fn invalidate(&mut self, request: &CalculationRequest) -> CalcResult<bool> {
        let key = request.cache_key()?;
        self.cache.invalidate(&key).await
    }

    /// Replace the configuration; cached outcomes were computed under the old
    /// one and are dropped
    pub async fn reconfigure(&mut self, config: EngineConfig) -> CalcResult<()> {
        config.validate()?;
        self.formatter = Formatter::new(config.format.clone());
        self.config = config;
        self.cache.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryResultCache;

    fn gratuity_request() -> CalculationRequest {
        CalculationRequest::Gratuity {
            last_drawn_salary: 10_000.0,
            years_of_service: 10,
        }
    }

    #[tokio::test]
    async fn test_calculate_caches_outcome() {
        let cache = MemoryResultCache::new();
        let mut engine = CalculatorEngine::new(cache.clone());

        let first = engine.calculate(&gratuity_request()).await.unwrap();
        assert_eq!(cache.len().unwrap(), 1);

        let second = engine.calculate(&gratuity_request()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache = MemoryResultCache::new();
        let mut engine = CalculatorEngine::new(cache.clone());

        let request = CalculationRequest::LoanPrepayment {
            outstanding: 100_000.0,
            annual_rate: RatePercent(10.0),
            remaining_months: 0,
            prepayment: 10_000.0,
        };
        assert!(engine.calculate(&request).await.is_err());
        assert!(cache.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_unrepresentable_ttl_is_an_error() {
        let mut config = EngineConfig::default();
        config.cache.ttl_seconds = 10_000_000_000_000;
        let mut engine = CalculatorEngine::with_config(config, MemoryResultCache::new());

        let err = engine.calculate(&gratuity_request()).await.unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));

        let mut config = EngineConfig::default();
        config.cache.ttl_seconds = 100_000_000 * 86_400;
        let mut engine = CalculatorEngine::with_config(config, MemoryResultCache::new());
        let err = engine.calculate(&gratuity_request()).await.unwrap_err();
        assert!(matches!(err, CalcError::Cache(_)));
    }

    #[tokio::test]
    async fn test_overlong_horizon_is_rejected() {
        let cache = MemoryResultCache::new();
        let mut engine = CalculatorEngine::new(cache.clone());

        let err = engine
            .calculate_json(
                r#"{"calculator": "sip", "monthly_investment": 1000,
                    "annual_return": 12, "years": 400000000}"#,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidScenario(_)));
        assert!(cache.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_invalidate() {
        let mut engine = CalculatorEngine::new(MemoryResultCache::new());
        engine.calculate(&gratuity_request()).await.unwrap();

        assert!(engine.invalidate(&gratuity_request()).await.unwrap());
        assert!(!engine.invalidate(&gratuity_request()).await.unwrap());
    }

    #[tokio::test]
    async fn test_reconfigure_clears_cache() {
        let cache = MemoryResultCache::new();
        let mut engine = CalculatorEngine::new(cache.clone());
        engine.calculate(&gratuity_request()).await.unwrap();

        let mut config = EngineConfig::default();
        config.format.currency_symbol = "Rs.".to_string();
        engine.reconfigure(config).await.unwrap();

        assert!(cache.is_empty().unwrap());
        assert_eq!(engine.formatter().currency(1500.0, 0), "Rs.1,500");
    }
}
