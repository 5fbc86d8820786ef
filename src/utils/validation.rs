//! Input sanitization and configuration validation utilities

use crate::types::*;

/// Longest horizon, in years, any calculator accepts
pub const MAX_HORIZON_YEARS: u32 = 10_000;

/// Longest horizon in months
pub const MAX_HORIZON_MONTHS: u32 = MAX_HORIZON_YEARS * 12;

/// Reject a year count beyond [`MAX_HORIZON_YEARS`]
pub fn validate_horizon_years(name: &str, years: u32) -> CalcResult<u32> {
    if years > MAX_HORIZON_YEARS {
        return Err(CalcError::InvalidScenario(format!(
            "{} of {} years exceeds the {} year limit",
            name, years, MAX_HORIZON_YEARS
        )));
    }

    Ok(years)
}

/// Reject a month count beyond [`MAX_HORIZON_MONTHS`]
pub fn validate_horizon_months(name: &str, months: u32) -> CalcResult<u32> {
    if months > MAX_HORIZON_MONTHS {
        return Err(CalcError::InvalidScenario(format!(
            "{} of {} months exceeds the {} month limit",
            name, months, MAX_HORIZON_MONTHS
        )));
    }

    Ok(months)
}

/// Months in a horizon of `years`, bounded by [`MAX_HORIZON_YEARS`]
pub fn horizon_months(name: &str, years: u32) -> CalcResult<u32> {
    validate_horizon_years(name, years)?
        .checked_mul(12)
        .ok_or_else(|| CalcError::InvalidScenario(format!("{} of {} years overflows", name, years)))
}

/// Replace a non-finite value (`NaN`, `±inf`) with `default`
pub fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}

/// Replace a non-finite value with zero
pub fn finite_or_zero(value: f64) -> f64 {
    finite_or(value, 0.0)
}

/// Whether an amount is finite and strictly positive
pub fn is_positive_amount(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Clamp a result to zero when it is negative or `NaN`
pub fn non_negative(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Validate a rate used as a configured assumption
pub fn validate_rate(name: &str, rate: f64) -> CalcResult<()> {
    if !rate.is_finite() {
        return Err(CalcError::Config(format!("{} must be a finite number", name)));
    }

    if rate <= -1.0 {
        return Err(CalcError::Config(format!(
            "{} must be greater than -100%, got {}",
            name, rate
        )));
    }

    Ok(())
}

/// Validate that a fraction lies in `0.0..=1.0`
pub fn validate_fraction(name: &str, fraction: f64) -> CalcResult<()> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(CalcError::Config(format!(
            "{} must be between 0 and 1, got {}",
            name, fraction
        )));
    }

    Ok(())
}

/// Validate that a count-like setting is non-zero
pub fn validate_positive_count(name: &str, value: u32) -> CalcResult<()> {
    if value == 0 {
        return Err(CalcError::Config(format!("{} must be positive", name)));
    }

    Ok(())
}
