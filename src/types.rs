//! Core types shared by every calculator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex used by the health formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// An annual interest or return rate expressed in percent (e.g. 12.0 for 12%)
///
/// The growth formulas take decimal rates. Widgets collect percentages, so
/// this wrapper makes the conversion explicit at the call site.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatePercent(pub f64);

impl RatePercent {
    /// Annual rate as a decimal fraction (`12.0` -> `0.12`)
    pub fn as_decimal(self) -> f64 {
        self.0 / 100.0
    }

    /// Monthly periodic rate as a decimal fraction (`12.0` -> `0.01`)
    pub fn monthly_decimal(self) -> f64 {
        self.as_decimal() / 12.0
    }
}

impl From<f64> for RatePercent {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// One point of a growth series used for charting
///
/// `principal` is the amount put in so far, `total_value` is what it is worth
/// at the end of `period`. Saturated values serialize as `"Infinity"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub period: u32,
    #[serde(with = "crate::utils::non_finite")]
    pub principal: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub total_value: f64,
}

impl GrowthPoint {
    pub fn new(period: u32, principal: f64, total_value: f64) -> Self {
        Self {
            period,
            principal,
            total_value,
        }
    }

    /// Growth earned on top of the principal at this point
    pub fn gain(&self) -> f64 {
        self.total_value - self.principal
    }
}

/// Ordered series of growth points, one per period
pub type GrowthSeries = Vec<GrowthPoint>;

/// Errors reported by the calculation engine
///
/// Numeric pathologies never surface here; they degrade to safe values.
/// These variants cover scenarios the caller must render as a message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
    #[error(
        "Loan does not amortize: EMI {emi:.2} does not cover \
         monthly interest {monthly_interest:.2}"
    )]
    NonAmortizing { emi: f64, monthly_interest: f64 },
    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Serialization(err.to_string())
    }
}

/// Result type for engine operations
pub type CalcResult<T> = Result<T, CalcError>;
