//! Time-value-of-money models: compound growth, SIP, RD and PPF
//!
//! Rates passed to these functions are decimal fractions. Each function
//! documents whether it expects an annual or a periodic rate; the caller
//! converts before calling (see [`crate::types::RatePercent`]).

pub mod interest;
pub mod savings;

pub use interest::*;
pub use savings::*;

/// `(1 + rate)^periods`, using integer powers where the exponent fits
pub(crate) fn growth_factor(rate: f64, periods: u32) -> f64 {
    match i32::try_from(periods) {
        Ok(n) => (1.0 + rate).powi(n),
        Err(_) => (1.0 + rate).powf(f64::from(periods)),
    }
}
