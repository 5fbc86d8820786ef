//! Recurring contribution models: SIP, recurring deposit and PPF

use crate::growth::growth_factor;
use crate::types::*;
use crate::utils::validation::{finite_or_zero, is_positive_amount, MAX_HORIZON_YEARS};

/// Up to this many periods the annuity closed form is always used directly
pub const DIRECT_ANNUITY_PERIOD_LIMIT: u32 = 600;

/// Block size used when the closed form overflows
pub const ANNUITY_CHUNK_PERIODS: u32 = 120;

/// Future value of a contribution made at the start of every period (SIP)
///
/// `periodic_rate` is the rate per contribution period as a decimal; for a
/// monthly SIP pass the annual rate divided by 12.
///
/// `P * ((1+r)^n - 1) / r * (1+r)`. A non-positive contribution or zero
/// periods yield 0; a non-positive rate yields the plain sum `P * n`. Beyond
/// 600 periods, if `(1+r)^n` is not finite the series is summed in
/// 120-period blocks, each compounded forward over the remaining periods.
pub fn recurring_contribution_future_value(
    contribution: f64,
    periodic_rate: f64,
    periods: u32,
) -> f64 {
    if !is_positive_amount(contribution) || periods == 0 {
        return 0.0;
    }

    let rate = finite_or_zero(periodic_rate);
    if rate <= 0.0 {
        return contribution * f64::from(periods);
    }

    let factor = growth_factor(rate, periods);
    if periods > DIRECT_ANNUITY_PERIOD_LIMIT && !factor.is_finite() {
        tracing::debug!(
            periods,
            chunk = ANNUITY_CHUNK_PERIODS,
            "annuity growth factor overflows, summing in chunks"
        );
        return chunked_future_value(contribution, rate, periods, ANNUITY_CHUNK_PERIODS);
    }

    contribution * ((factor - 1.0) / rate) * (1.0 + rate)
}

/// Annuity-due future value summed block by block
///
/// Each block of at most `chunk` periods is valued at its own end, then
/// compounded over the periods that follow it. Numerically equivalent to the
/// closed form while keeping every exponent bounded by `chunk` or the
/// remaining horizon.
pub(crate) fn chunked_future_value(contribution: f64, rate: f64, periods: u32, chunk: u32) -> f64 {
    let chunk = chunk.max(1);
    let mut total = 0.0;
    let mut start = 0;

    while start < periods {
        let block = chunk.min(periods - start);
        let remaining = periods - start - block;
        let block_value = contribution * ((growth_factor(rate, block) - 1.0) / rate) * (1.0 + rate);
        total += block_value * growth_factor(rate, remaining);
        start += block;
    }

    total
}

/// Maturity value of a recurring deposit with quarterly compounding
///
/// `annual_rate` is the annual rate as a decimal; `months` is the number of
/// monthly deposits. Deposit `i` (1-based) earns `rate/4` per quarter over
/// `(months - i + 1) / 3` quarters, so the sum is evaluated deposit by
/// deposit. The fractional-quarter exponent is an approximation of bank
/// practice and is kept as is so results stay comparable.
pub fn recurring_deposit_maturity(monthly_deposit: f64, annual_rate: f64, months: u32) -> f64 {
    if !is_positive_amount(monthly_deposit) || months == 0 {
        return 0.0;
    }

    let quarterly_base = 1.0 + finite_or_zero(annual_rate) / 4.0;
    (1..=months)
        .map(|i| monthly_deposit * quarterly_base.powf(f64::from(months - i + 1) / 3.0))
        .sum()
}

/// Maturity of a yearly deposit compounded annually (PPF style)
///
/// Each deposit is made at the start of the year: `m = (m + P) * (1 + r)`.
pub fn ppf_maturity(yearly_deposit: f64, annual_rate: f64, years: u32) -> f64 {
    if !is_positive_amount(yearly_deposit) || years == 0 {
        return 0.0;
    }

    let rate = finite_or_zero(annual_rate);
    (0..years).fold(0.0, |maturity, _| (maturity + yearly_deposit) * (1.0 + rate))
}

/// Year-by-year SIP value: invested amount against accumulated value
///
/// The series stops at [`MAX_HORIZON_YEARS`].
pub fn sip_growth_series(monthly_contribution: f64, monthly_rate: f64, years: u32) -> GrowthSeries {
    (0..=years.min(MAX_HORIZON_YEARS))
        .map(|year| {
            let months = year * 12;
            GrowthPoint::new(
                year,
                monthly_contribution * f64::from(months),
                recurring_contribution_future_value(monthly_contribution, monthly_rate, months),
            )
        })
        .collect()
}

/// Year-by-year recurring deposit value, capped at [`MAX_HORIZON_YEARS`]
pub fn recurring_deposit_series(
    monthly_deposit: f64,
    annual_rate: f64,
    years: u32,
) -> GrowthSeries {
    (0..=years.min(MAX_HORIZON_YEARS))
        .map(|year| {
            let months = year * 12;
            GrowthPoint::new(
                year,
                monthly_deposit * f64::from(months),
                recurring_deposit_maturity(monthly_deposit, annual_rate, months),
            )
        })
        .collect()
}

/// Year-by-year PPF balance
pub fn ppf_series(yearly_deposit: f64, annual_rate: f64, years: u32) -> GrowthSeries {
    let rate = finite_or_zero(annual_rate);
    let years = years.min(MAX_HORIZON_YEARS);
    let mut balance = 0.0;
    let mut series = Vec::with_capacity(years as usize + 1);
    series.push(GrowthPoint::new(0, 0.0, 0.0));

    for year in 1..=years {
        balance = (balance + yearly_deposit) * (1.0 + rate);
        series.push(GrowthPoint::new(
            year,
            yearly_deposit * f64::from(year),
            balance,
        ));
    }

    series
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
    fn test_sip_ten_years() {
        // 50,000 a month at 12% p.a. for 10 years
        let value = recurring_contribution_future_value(50_000.0, 0.12 / 12.0, 120);
        assert_close(value, 11_616_953.82, 1.0);
        assert_eq!(50_000.0 * 120.0, 6_000_000.0);
    }

    #[test]
    fn test_sip_edge_cases() {
        assert_eq!(recurring_contribution_future_value(0.0, 0.01, 120), 0.0);
        assert_eq!(recurring_contribution_future_value(-10.0, 0.01, 120), 0.0);
        assert_eq!(recurring_contribution_future_value(1000.0, 0.01, 0), 0.0);
        assert_eq!(recurring_contribution_future_value(1000.0, 0.0, 24), 24_000.0);
        assert_eq!(recurring_contribution_future_value(1000.0, -0.01, 24), 24_000.0);
        assert_eq!(recurring_contribution_future_value(f64::NAN, 0.01, 24), 0.0);
    }

    #[test]
    fn test_chunked_matches_closed_form() {
        let (contribution, rate, periods) = (5_000.0, 0.01, 600);
        let direct = recurring_contribution_future_value(contribution, rate, periods);
        let chunked = chunked_future_value(contribution, rate, periods, ANNUITY_CHUNK_PERIODS);
        assert!(((direct - chunked) / direct).abs() < 1e-9);

        // uneven final block
        let direct = recurring_contribution_future_value(contribution, rate, 530);
        let chunked = chunked_future_value(contribution, rate, 530, ANNUITY_CHUNK_PERIODS);
        assert!(((direct - chunked) / direct).abs() < 1e-9);
    }

    #[test]
    fn test_overflowing_horizon_never_nan() {
        let value = recurring_contribution_future_value(1000.0, 0.5, 2400);
        assert!(!value.is_nan());
        assert!(value > 0.0);
    }

    #[test]
    fn test_recurring_deposit_one_year() {
        // 1,000 a month at 7% for 12 months
        let maturity = recurring_deposit_maturity(1000.0, 0.07, 12);
        assert_close(maturity, 12_462.13, 0.01);
    }

    #[test]
    fn test_recurring_deposit_zero_rate_is_sum() {
        assert_close(recurring_deposit_maturity(2500.0, 0.0, 36), 90_000.0, 1e-6);
        assert_eq!(recurring_deposit_maturity(2500.0, 0.07, 0), 0.0);
    }

    #[test]
    fn test_ppf_fifteen_years() {
        let maturity = ppf_maturity(150_000.0, 0.071, 15);
        assert_close(maturity, 4_068_209.22, 0.01);
    }

    #[test]
    fn test_sip_series_starts_at_zero() {
        let series = sip_growth_series(10_000.0, 0.01, 5);
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].total_value, 0.0);
        assert_eq!(series[5].principal, 600_000.0);
        assert_close(
            series[5].total_value,
            recurring_contribution_future_value(10_000.0, 0.01, 60),
            1e-6,
        );
    }

    #[test]
    fn test_ppf_series_matches_maturity() {
        let series = ppf_series(100_000.0, 0.071, 15);
        assert_eq!(series.len(), 16);
        assert_close(series[15].total_value, ppf_maturity(100_000.0, 0.071, 15), 1e-6);
    }

    #[test]
    fn test_series_length_is_capped() {
        let series = sip_growth_series(1_000.0, 0.01, u32::MAX);
        assert_eq!(series.len(), MAX_HORIZON_YEARS as usize + 1);
        assert_eq!(ppf_series(1_000.0, 0.07, u32::MAX).len(), series.len());
    }

    #[test]
    fn test_rd_series() {
        let series = recurring_deposit_series(1000.0, 0.07, 2);
        assert_eq!(series[1].principal, 12_000.0);
        assert_close(series[1].total_value, 12_462.13, 0.01);
    }
}
