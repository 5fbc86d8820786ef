//! Retirement corpus and the monthly SIP needed to build it

use serde::{Deserialize, Serialize};

use crate::growth::{growth_factor, recurring_contribution_future_value, sip_growth_series};
use crate::types::*;
use crate::utils::validation::{
    finite_or_zero, horizon_months, non_negative, validate_positive_count, validate_rate,
};

/// Nominal annual return assumed on the corpus after retirement
pub const POST_RETIREMENT_RETURN: f64 = 0.07;

/// Years the corpus has to fund expenses
pub const YEARS_IN_RETIREMENT: u32 = 25;

/// Real returns at or below this are treated as zero
pub const REAL_RETURN_FLOOR: f64 = 0.001;

/// Fixed assumptions behind the retirement plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetirementAssumptions {
    pub post_retirement_return: f64,
    pub years_in_retirement: u32,
    pub real_return_floor: f64,
}

impl Default for RetirementAssumptions {
    fn default() -> Self {
        Self {
            post_retirement_return: POST_RETIREMENT_RETURN,
            years_in_retirement: YEARS_IN_RETIREMENT,
            real_return_floor: REAL_RETURN_FLOOR,
        }
    }
}

impl RetirementAssumptions {
    pub fn validate(&self) -> CalcResult<()> {
        validate_rate("post_retirement_return", self.post_retirement_return)?;
        validate_positive_count("years_in_retirement", self.years_in_retirement)?;
        Ok(())
    }
}

/// Corpus required at retirement and the SIP that reaches it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    pub years_to_retirement: u32,
    /// Today's monthly expense grown by inflation until retirement
    #[serde(with = "crate::utils::non_finite")]
    pub future_monthly_expense: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub annual_expense_at_retirement: f64,
    /// Post-retirement return net of inflation
    pub real_return: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub corpus_required: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub monthly_sip_needed: f64,
    /// Monthly return earned while accumulating
    pub monthly_return: f64,
}

impl RetirementPlan {
    /// Year-by-year accumulation of the required SIP
    pub fn accumulation_series(&self) -> GrowthSeries {
        sip_growth_series(
            self.monthly_sip_needed,
            self.monthly_return,
            self.years_to_retirement,
        )
    }
}

/// Size a retirement corpus with the default assumptions
///
/// `inflation_rate` and `pre_retirement_return` are annual decimals.
/// See [`retirement_plan_with`].
pub fn retirement_plan(
    current_age: u32,
    retirement_age: u32,
    current_monthly_expense: f64,
    inflation_rate: f64,
    pre_retirement_return: f64,
) -> CalcResult<RetirementPlan> {
    retirement_plan_with(
        &RetirementAssumptions::default(),
        current_age,
        retirement_age,
        current_monthly_expense,
        inflation_rate,
        pre_retirement_return,
    )
}

/// Size a retirement corpus and back-solve the monthly SIP
///
/// 1. Grow the monthly expense by inflation until retirement.
/// 2. Corpus = present value of the annual expense paid for
///    `years_in_retirement` years at the real return
///    `(1 + post_return) / (1 + inflation) - 1`; at or below the floor the
///    corpus is simply `annual_expense * years`.
/// 3. SIP = corpus divided by the future value of one unit contributed monthly
///    until retirement (or by the number of months when the return is not
///    positive).
///
/// A retirement age that is not after the current age is an invalid scenario,
/// and so is a gap longer than `MAX_HORIZON_YEARS`.
pub fn retirement_plan_with(
    assumptions: &RetirementAssumptions,
    current_age: u32,
    retirement_age: u32,
    current_monthly_expense: f64,
    inflation_rate: f64,
    pre_retirement_return: f64,
) -> CalcResult<RetirementPlan> {
    if retirement_age <= current_age {
        tracing::warn!(current_age, retirement_age, "retirement age must exceed current age");
        return Err(CalcError::InvalidScenario(format!(
            "retirement age {} must be greater than current age {}",
            retirement_age, current_age
        )));
    }

    let years_to_retirement = retirement_age - current_age;
    let months = horizon_months("years to retirement", years_to_retirement)?;
    let inflation = finite_or_zero(inflation_rate);
    let future_monthly_expense =
        finite_or_zero(current_monthly_expense) * growth_factor(inflation, years_to_retirement);
    let annual_expense = future_monthly_expense * 12.0;

    let years = f64::from(assumptions.years_in_retirement);
    let real_return = (1.0 + assumptions.post_retirement_return) / (1.0 + inflation) - 1.0;
    let corpus = if real_return <= assumptions.real_return_floor {
        annual_expense * years
    } else {
        annual_expense * (1.0 - (1.0 + real_return).powf(-years)) / real_return
    };

    let monthly_return = finite_or_zero(pre_retirement_return) / 12.0;
    let sip = if monthly_return <= 0.0 {
        corpus / f64::from(months.max(1))
    } else {
        corpus / recurring_contribution_future_value(1.0, monthly_return, months)
    };

    Ok(RetirementPlan {
        years_to_retirement,
        future_monthly_expense,
        annual_expense_at_retirement: annual_expense,
        real_return,
        corpus_required: non_negative(corpus),
        monthly_sip_needed: non_negative(sip),
        monthly_return,
    })
}
