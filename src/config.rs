//! Engine configuration loaded from JSON

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::format::FormatConfig;
use crate::retirement::{NpsAssumptions, RetirementAssumptions};
use crate::tax::TaxConfig;
use crate::types::*;

/// Result cache settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long an evaluated outcome stays fresh
    pub ttl_seconds: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_seconds: 300 }
    }
}

impl CacheConfig {
    /// The TTL as a duration; `Config` when it does not fit one
    pub fn ttl(&self) -> CalcResult<chrono::Duration> {
        chrono::Duration::try_seconds(self.ttl_seconds).ok_or_else(|| {
            CalcError::Config(format!("cache ttl of {} seconds is out of range", self.ttl_seconds))
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        if self.ttl_seconds <= 0 {
            return Err(CalcError::Config(format!(
                "cache ttl must be positive, got {}",
                self.ttl_seconds
            )));
        }

        if Utc::now().checked_add_signed(self.ttl()?).is_none() {
            return Err(CalcError::Config(format!(
                "cache ttl of {} seconds expires past the representable date range",
                self.ttl_seconds
            )));
        }

        Ok(())
    }
}

/// Every tunable assumption of the calculator engine
///
/// Each section falls back to its defaults, so a partial document such as
/// `{"cache": {"ttl_seconds": 60}}` is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub format: FormatConfig,
    pub retirement: RetirementAssumptions,
    pub nps: NpsAssumptions,
    pub tax: TaxConfig,
    pub cache: CacheConfig,
}

impl EngineConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CalcError::Config(format!(
                "cannot read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.as_ref().display(), "loading engine config");
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.retirement.validate()?;
        self.nps.validate()?;
        self.tax.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.format.currency_symbol, "₹");
        assert_eq!(config.retirement.years_in_retirement, 25);
        assert_eq!(config.nps.retirement_age, 60);
        assert_eq!(config.tax.cess_rate, BigDecimal::from(4));
        assert_eq!(config.cache.ttl().unwrap(), chrono::Duration::minutes(5));
    }

    #[test]
    fn test_partial_document() {
        let config = EngineConfig::from_json_str(
            r#"{"cache": {"ttl_seconds": 60}, "retirement": {"years_in_retirement": 30}}"#,
        )
        .unwrap();

        assert_eq!(config.cache.ttl_seconds, 60);
        assert_eq!(config.retirement.years_in_retirement, 30);
        assert_eq!(config.retirement.post_retirement_return, 0.07);
        assert_eq!(config.format, FormatConfig::default());
    }

    #[test]
    fn test_invalid_documents() {
        let err = EngineConfig::from_json_str(r#"{"cache": {"ttl_seconds": 0}}"#).unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));

        let err =
            EngineConfig::from_json_str(r#"{"nps": {"lump_sum_fraction": 1.5}}"#).unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));

        let err = EngineConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CalcError::Serialization(_)));
    }

    #[test]
    fn test_out_of_range_ttl_is_rejected() {
        // beyond what chrono::Duration holds
        let json = r#"{"cache": {"ttl_seconds": 10000000000000}}"#;
        let err = EngineConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));

        let config = CacheConfig {
            ttl_seconds: i64::MAX,
        };
        assert!(matches!(config.ttl(), Err(CalcError::Config(_))));

        // a valid duration whose expiry overflows the calendar
        let config = CacheConfig {
            ttl_seconds: 100_000_000 * 86_400,
        };
        assert!(config.ttl().is_ok());
        assert!(matches!(config.validate(), Err(CalcError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_path("/nonexistent/engine.json").unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));
    }
}
