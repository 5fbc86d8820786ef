//! Equated monthly instalment (EMI) and its inverse

use serde::{Deserialize, Serialize};

use crate::growth::growth_factor;
use crate::utils::validation::{
    finite_or_zero, is_positive_amount, non_negative, MAX_HORIZON_MONTHS,
};

/// Periodic payment that fully amortizes `principal` over `periods`
///
/// `P * r * (1+r)^n / ((1+r)^n - 1)` with `r` the periodic rate as a decimal
/// (annual rate / 12 for monthly instalments). A zero rate is repaid in
/// equal straight-line parts; zero periods yield 0. Loan tenors are bounded
/// in practice (a few hundred months), so no overflow guard is applied.
pub fn amortized_payment(principal: f64, periodic_rate: f64, periods: u32) -> f64 {
    let principal = finite_or_zero(principal);
    let rate = finite_or_zero(periodic_rate);

    if periods == 0 {
        return 0.0;
    }

    let factor = growth_factor(rate, periods);
    if rate == 0.0 || factor == 1.0 {
        return principal / f64::from(periods);
    }

    principal * rate * factor / (factor - 1.0)
}

/// Principal that a periodic `payment` can service over `periods` (reverse EMI)
///
/// `payment * ((1+r)^n - 1) / (r * (1+r)^n)`. A non-positive payment or a
/// non-positive rate yield 0.
pub fn inverse_amortization(payment: f64, periodic_rate: f64, periods: u32) -> f64 {
    let rate = finite_or_zero(periodic_rate);
    if !is_positive_amount(payment) || rate <= 0.0 || periods == 0 {
        return 0.0;
    }

    let factor = growth_factor(rate, periods);
    payment * (factor - 1.0) / (rate * factor)
}

/// EMI together with what the loan costs in total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    #[serde(with = "crate::utils::non_finite")]
    pub principal: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub emi: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub total_payment: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub total_interest: f64,
}

impl LoanSummary {
    /// Interest as a percentage of the principal
    pub fn interest_percent(&self) -> f64 {
        if self.principal > 0.0 {
            self.total_interest / self.principal * 100.0
        } else {
            0.0
        }
    }
}

/// EMI, total payment and total interest for a loan
pub fn loan_summary(principal: f64, periodic_rate: f64, periods: u32) -> LoanSummary {
    let principal = finite_or_zero(principal);
    let emi = amortized_payment(principal, periodic_rate, periods);
    let total_payment = emi * f64::from(periods);

    LoanSummary {
        principal,
        emi,
        total_payment,
        total_interest: total_payment - principal,
    }
}

/// Amount borrowed when an asset is bought with a down payment
pub fn financed_amount(price: f64, down_payment: f64) -> f64 {
    non_negative(finite_or_zero(price) - finite_or_zero(down_payment))
}

/// Principal and interest repaid within one year of the loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationYear {
    pub year: u32,
    #[serde(with = "crate::utils::non_finite")]
    pub principal_paid: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub interest_paid: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub closing_balance: f64,
}

/// Year-by-year split of EMIs into principal and interest
///
/// Each month the balance accrues `balance * r` interest and the rest of the
/// EMI reduces the balance. A trailing partial year is reported as its own
/// entry. Terms longer than [`MAX_HORIZON_MONTHS`] are cut at that limit.
pub fn amortization_schedule(
    principal: f64,
    periodic_rate: f64,
    periods: u32,
) -> Vec<AmortizationYear> {
    let rate = finite_or_zero(periodic_rate);
    let periods = periods.min(MAX_HORIZON_MONTHS);
    let emi = amortized_payment(principal, rate, periods);
    let mut balance = finite_or_zero(principal);
    let mut schedule = Vec::with_capacity(periods.div_ceil(12) as usize);
    let mut year_principal = 0.0;
    let mut year_interest = 0.0;

    for month in 1..=periods {
        let interest_payment = balance * rate;
        let principal_payment = emi - interest_payment;
        balance -= principal_payment;

        year_principal += principal_payment;
        year_interest += interest_payment;

        if month % 12 == 0 || month == periods {
            schedule.push(AmortizationYear {
                year: month.div_ceil(12),
                principal_paid: year_principal,
                interest_paid: year_interest,
                closing_balance: non_negative(balance),
            });
            year_principal = 0.0;
            year_interest = 0.0;
        }
    }

    schedule
}

/// Borrowing capacity under a fixed-obligation-to-income ratio (FOIR)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanEligibility {
    /// Largest total EMI the lender allows (`income * foir / 100`)
    pub max_emi: f64,
    /// What is left after existing EMIs; may be negative
    pub available_emi: f64,
    pub eligible_amount: f64,
    /// EMI on the eligible amount
    pub expected_emi: f64,
}

/// Loan amount a borrower qualifies for
///
/// `periodic_rate` is the monthly rate as a decimal. No loan is offered when
/// the available EMI or the rate is not positive.
pub fn loan_eligibility(
    monthly_income: f64,
    existing_emi: f64,
    periodic_rate: f64,
    periods: u32,
    foir_percent: f64,
) -> LoanEligibility {
    let max_emi = finite_or_zero(monthly_income) * finite_or_zero(foir_percent) / 100.0;
    let available_emi = max_emi - finite_or_zero(existing_emi);
    let eligible_amount = inverse_amortization(available_emi, periodic_rate, periods);

    LoanEligibility {
        max_emi,
        available_emi,
        eligible_amount,
        expected_emi: amortized_payment(eligible_amount, periodic_rate, periods),
    }
}
