//! Lump-sum growth: compound and simple interest

use serde::{Deserialize, Serialize};

use crate::growth::growth_factor;
use crate::types::*;
use crate::utils::validation::{finite_or_zero, MAX_HORIZON_YEARS};

/// Above this many compounding periods the growth is evaluated in log space
pub const LOG_SPACE_PERIOD_THRESHOLD: f64 = 1000.0;

/// Largest natural-log result that is still exponentiated
pub const MAX_LOG_GROWTH: f64 = 700.0;

/// How often interest is credited within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl CompoundingFrequency {
    /// Number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::HalfYearly => 2,
            CompoundingFrequency::Yearly => 1,
        }
    }
}

/// Final amount of `principal` compounded `frequency` times a year
///
/// `annual_rate` is the annual rate as a decimal (`0.08` for 8%).
///
/// A non-positive principal, a zero horizon, a non-positive rate or a zero
/// frequency leaves the principal unchanged. Non-finite principal or rate
/// are read as zero. Long horizons (more than 1000 compounding periods) are
/// evaluated as `exp(ln P + nt * ln(1 + r/n))`, and a log result above 700
/// is reported as positive infinity instead of overflowing.
pub fn compound_interest(principal: f64, annual_rate: f64, frequency: u32, years: u32) -> f64 {
    let principal = finite_or_zero(principal);
    let rate = finite_or_zero(annual_rate);

    if principal <= 0.0 || years == 0 || rate <= 0.0 || frequency == 0 {
        return principal;
    }

    let n = f64::from(frequency);
    let exponent = n * f64::from(years);
    let base = 1.0 + rate / n;

    if exponent > LOG_SPACE_PERIOD_THRESHOLD {
        let log_result = principal.ln() + exponent * base.ln();
        if log_result > MAX_LOG_GROWTH {
            tracing::warn!(
                principal,
                rate,
                periods = exponent,
                "compound growth exceeds representable range, saturating to infinity"
            );
            return f64::INFINITY;
        }
        tracing::debug!(periods = exponent, "evaluating compound growth in log space");
        return log_result.exp();
    }

    principal * growth_factor(rate / n, frequency * years)
}

/// Simple interest earned on `principal` over `years` (`P * r * t`)
pub fn simple_interest(principal: f64, annual_rate: f64, years: u32) -> f64 {
    finite_or_zero(principal) * finite_or_zero(annual_rate) * f64::from(years)
}

/// Annual yield of a monthly periodic rate, `(1 + r)^12 - 1`
pub fn effective_annual_rate(monthly_rate: f64) -> f64 {
    growth_factor(finite_or_zero(monthly_rate), 12) - 1.0
}

/// Year-by-year value of a compounded lump sum, from year 0 to `years`
///
/// At most [`MAX_HORIZON_YEARS`] years are listed.
pub fn compound_growth_series(
    principal: f64,
    annual_rate: f64,
    frequency: u32,
    years: u32,
) -> GrowthSeries {
    (0..=years.min(MAX_HORIZON_YEARS))
        .map(|year| {
            GrowthPoint::new(
                year,
                principal,
                compound_interest(principal, annual_rate, frequency, year),
            )
        })
        .collect()
}

/// Year-by-year value of a lump sum earning simple interest
pub fn simple_interest_series(principal: f64, annual_rate: f64, years: u32) -> GrowthSeries {
    (0..=years.min(MAX_HORIZON_YEARS))
        .map(|year| {
            GrowthPoint::new(
                year,
                principal,
                principal + simple_interest(principal, annual_rate, year),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {} to be within {} of {}",
            actual,
            tol,
            expected
        );
    }

    #[test]
    fn test_zero_rate_keeps_principal() {
        for principal in [1.0, 1000.0, 2_500_000.0] {
            for frequency in [1, 4, 12] {
                for years in [1, 10, 40] {
                    assert_eq!(compound_interest(principal, 0.0, frequency, years), principal);
                }
            }
        }
    }

    #[test]
    fn test_zero_years_keeps_principal() {
        assert_eq!(compound_interest(50_000.0, 0.09, 4, 0), 50_000.0);
    }

    #[test]
    fn test_non_positive_principal_returned_unchanged() {
        assert_eq!(compound_interest(0.0, 0.1, 12, 10), 0.0);
        assert_eq!(compound_interest(-500.0, 0.1, 12, 10), -500.0);
    }

    #[test]
    fn test_non_finite_inputs_degrade() {
        assert_eq!(compound_interest(f64::NAN, 0.1, 12, 10), 0.0);
        assert_eq!(compound_interest(1000.0, f64::NAN, 12, 10), 1000.0);
    }

    #[test]
    fn test_quarterly_fixed_deposit() {
        // 1000 at 8% compounded quarterly for 5 years
        let amount = compound_interest(1000.0, 0.08, 4, 5);
        assert_close(amount, 1485.947, 0.01);
    }

    #[test]
    fn test_monotonic_in_years_and_rate() {
        let mut previous = 0.0;
        for years in 0..=120 {
            let value = compound_interest(10_000.0, 0.12, 12, years);
            assert!(value >= previous);
            previous = value;
        }

        let mut previous = 0.0;
        for step in 0..=40 {
            let rate = f64::from(step) * 0.005;
            let value = compound_interest(10_000.0, rate, 12, 30);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_long_horizon_uses_log_space() {
        let value = compound_interest(1000.0, 0.20, 12, 500);
        assert!(value.is_finite());
        assert!(value > 0.0);
        assert_close(value / 1.178_983_596_644e46, 1.0, 1e-9);
    }

    #[test]
    fn test_overflow_saturates_to_infinity() {
        let value = compound_interest(1e6, 0.5, 12, 2000);
        assert_eq!(value, f64::INFINITY);
        assert!(!value.is_nan());
    }

    #[test]
    fn test_log_space_matches_direct_near_threshold() {
        // 84 years monthly = 1008 periods (log space), 83 years = 996 (direct)
        let direct = compound_interest(1000.0, 0.06, 12, 83);
        let logged = compound_interest(1000.0, 0.06, 12, 84);
        assert_close(logged / direct, (1.005f64).powi(12), 1e-9);
    }

    #[test]
    fn test_simple_interest() {
        assert_close(simple_interest(100_000.0, 0.08, 5), 40_000.0, 1e-6);
    }

    #[test]
    fn test_effective_annual_rate() {
        assert_close(effective_annual_rate(0.01), 0.126_825, 1e-6);
    }

    #[test]
    fn test_compound_growth_series() {
        let series = compound_growth_series(1000.0, 0.10, 1, 3);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].total_value, 1000.0);
        assert_close(series[3].total_value, 1331.0, 1e-9);
        assert_close(series[3].gain(), 331.0, 1e-9);
        assert!(series.iter().all(|p| p.principal == 1000.0));
    }

    #[test]
    fn test_frequency_periods() {
        assert_eq!(CompoundingFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(CompoundingFrequency::HalfYearly.periods_per_year(), 2);
    }
}
