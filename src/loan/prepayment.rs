//! Part-prepayment of a running loan with the EMI held constant

use serde::{Deserialize, Serialize};

use crate::loan::emi::amortized_payment;
use crate::types::*;
use crate::utils::validation::{finite_or_zero, non_negative};

/// Slack allowed before rounding a solved tenure up to the next month
const TENURE_TOLERANCE: f64 = 1e-9;

/// Effect of a lump-sum prepayment on a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrepaymentImpact {
    /// EMI on the balance before prepayment, kept after prepayment
    pub current_emi: f64,
    pub old_total_interest: f64,
    pub new_principal: f64,
    pub new_tenure_months: u32,
    pub new_total_interest: f64,
    pub interest_saved: f64,
    pub tenure_saved_months: u32,
}

impl PrepaymentImpact {
    /// Tenure saved as whole years plus leftover months
    pub fn tenure_saved_years_months(&self) -> (u32, u32) {
        (self.tenure_saved_months / 12, self.tenure_saved_months % 12)
    }
}

/// Interest and tenure saved by prepaying part of a loan
///
/// `annual_rate` is the annual rate as a decimal; the monthly rate is
/// `annual_rate / 12`. The EMI on the current balance is held constant and
/// the new tenure is solved as `ceil(-ln(1 - P'r/EMI) / ln(1+r))`.
///
/// A prepayment that clears the balance gives a zero tenure and saves all
/// remaining interest. When the held EMI does not exceed the interest on the
/// reduced balance the loan can never amortize and
/// [`CalcError::NonAmortizing`] is returned.
pub fn prepayment_impact(
    outstanding: f64,
    annual_rate: f64,
    remaining_months: u32,
    prepayment: f64,
) -> CalcResult<PrepaymentImpact> {
    if remaining_months == 0 {
        tracing::warn!("prepayment requested on a loan with no remaining tenure");
        return Err(CalcError::InvalidScenario(
            "remaining tenure must be at least one month".to_string(),
        ));
    }

    let outstanding = finite_or_zero(outstanding);
    let rate = finite_or_zero(annual_rate) / 12.0;
    let months = f64::from(remaining_months);

    let current_emi = amortized_payment(outstanding, rate, remaining_months);
    let old_total_interest = current_emi * months - outstanding;
    let new_principal = outstanding - non_negative(prepayment);

    if new_principal <= 0.0 {
        return Ok(PrepaymentImpact {
            current_emi,
            old_total_interest,
            new_principal: 0.0,
            new_tenure_months: 0,
            new_total_interest: 0.0,
            interest_saved: old_total_interest,
            tenure_saved_months: remaining_months,
        });
    }

    let new_tenure_months =
        tenure_for_payment(new_principal, rate, current_emi)?.min(remaining_months);

    let new_total_interest = current_emi * f64::from(new_tenure_months) - new_principal;

    Ok(PrepaymentImpact {
        current_emi,
        old_total_interest,
        new_principal,
        new_tenure_months,
        new_total_interest,
        interest_saved: old_total_interest - new_total_interest,
        tenure_saved_months: remaining_months - new_tenure_months,
    })
}

/// Months needed to repay `principal` with a fixed periodic `payment`
///
/// `periodic_rate` is the monthly rate as a decimal. Solves
/// `n = -ln(1 - P*r/payment) / ln(1+r)` and rounds up to whole months; a
/// zero rate gives `ceil(P / payment)`. A payment that does not exceed the
/// periodic interest never repays the loan and yields
/// [`CalcError::NonAmortizing`].
pub fn tenure_for_payment(principal: f64, periodic_rate: f64, payment: f64) -> CalcResult<u32> {
    let principal = finite_or_zero(principal);
    if principal <= 0.0 {
        return Ok(0);
    }

    let rate = finite_or_zero(periodic_rate);
    let payment = finite_or_zero(payment);
    let monthly_interest = principal * rate;
    if payment <= 0.0 || payment <= monthly_interest {
        tracing::warn!(
            emi = payment,
            monthly_interest,
            "payment does not cover periodic interest"
        );
        return Err(CalcError::NonAmortizing {
            emi: payment,
            monthly_interest,
        });
    }

    let solved = if rate <= 0.0 {
        principal / payment
    } else {
        -(1.0 - monthly_interest / payment).ln() / (1.0 + rate).ln()
    };

    Ok((solved - TENURE_TOLERANCE).ceil().max(0.0) as u32)
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
    fn test_prepayment_shortens_tenure() {
        let impact = prepayment_impact(2_000_000.0, 0.09, 180, 500_000.0).unwrap();

        assert_close(impact.current_emi, 20_285.33, 0.01);
        assert_eq!(impact.new_tenure_months, 109);
        assert_eq!(impact.tenure_saved_months, 71);
        assert_eq!(impact.tenure_saved_years_months(), (5, 11));
        assert_close(impact.interest_saved, 940_258.55, 0.5);
    }

    #[test]
    fn test_zero_prepayment_keeps_tenure() {
        let impact = prepayment_impact(2_000_000.0, 0.09, 180, 0.0).unwrap();
        assert_eq!(impact.new_tenure_months, 180);
        assert_eq!(impact.tenure_saved_months, 0);
        assert_close(impact.interest_saved, 0.0, 1e-6);
    }

    #[test]
    fn test_full_prepayment_closes_loan() {
        let impact = prepayment_impact(300_000.0, 0.1, 36, 400_000.0).unwrap();
        assert_eq!(impact.new_tenure_months, 0);
        assert_eq!(impact.new_principal, 0.0);
        assert_close(impact.interest_saved, impact.old_total_interest, 1e-9);
        assert_eq!(impact.tenure_saved_months, 36);
    }

    #[test]
    fn test_zero_rate_prepayment() {
        let impact = prepayment_impact(120_000.0, 0.0, 12, 30_000.0).unwrap();
        assert_close(impact.current_emi, 10_000.0, 1e-9);
        assert_eq!(impact.new_tenure_months, 9);
        assert_close(impact.interest_saved, 0.0, 1e-6);
    }

    #[test]
    fn test_no_remaining_tenure_is_invalid() {
        let err = prepayment_impact(100_000.0, 0.1, 0, 10_000.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidScenario(_)));
    }

    #[test]
    fn test_payment_below_interest_is_non_amortizing() {
        let err = tenure_for_payment(100_000.0, 0.01, 500.0).unwrap_err();
        assert_eq!(
            err,
            CalcError::NonAmortizing {
                emi: 500.0,
                monthly_interest: 1000.0,
            }
        );

        // interest-only payment never reduces the balance either
        assert!(tenure_for_payment(100_000.0, 0.01, 1000.0).is_err());
    }

    #[test]
    fn test_tenure_for_payment() {
        let emi = amortized_payment(1_000_000.0, 0.10 / 12.0, 60);
        assert_eq!(tenure_for_payment(1_000_000.0, 0.10 / 12.0, emi).unwrap(), 60);
        assert_eq!(tenure_for_payment(0.0, 0.01, 100.0).unwrap(), 0);
        assert_eq!(tenure_for_payment(1000.0, 0.0, 300.0).unwrap(), 4);
    }
}
