//! National Pension System (NPS) corpus and pension projection

use serde::{Deserialize, Serialize};

use crate::growth::{recurring_contribution_future_value, sip_growth_series};
use crate::types::*;
use crate::utils::validation::{
    finite_or_zero, horizon_months, validate_fraction, validate_rate, MAX_HORIZON_YEARS,
};

/// Withdrawal and annuity rules applied at NPS maturity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NpsAssumptions {
    pub retirement_age: u32,
    /// Share of the corpus withdrawn as a lump sum
    pub lump_sum_fraction: f64,
    /// Annual rate paid by the annuity bought with the rest
    pub annuity_rate: f64,
}

impl Default for NpsAssumptions {
    fn default() -> Self {
        Self {
            retirement_age: 60,
            lump_sum_fraction: 0.6,
            annuity_rate: 0.06,
        }
    }
}

impl NpsAssumptions {
    pub fn validate(&self) -> CalcResult<()> {
        if self.retirement_age > MAX_HORIZON_YEARS {
            return Err(CalcError::Config(format!(
                "retirement_age must be at most {}, got {}",
                MAX_HORIZON_YEARS, self.retirement_age
            )));
        }
        validate_fraction("lump_sum_fraction", self.lump_sum_fraction)?;
        validate_rate("annuity_rate", self.annuity_rate)?;
        Ok(())
    }
}

/// Projected NPS corpus and the pension it buys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpsProjection {
    pub years_to_retirement: u32,
    pub total_contribution: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub corpus: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub lump_sum: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub annuity_corpus: f64,
    #[serde(with = "crate::utils::non_finite")]
    pub monthly_pension: f64,
    pub series: GrowthSeries,
}

/// NPS projection with the default withdrawal rules
pub fn nps_projection(
    current_age: u32,
    monthly_contribution: f64,
    annual_return: f64,
) -> CalcResult<NpsProjection> {
    nps_projection_with(
        &NpsAssumptions::default(),
        current_age,
        monthly_contribution,
        annual_return,
    )
}

/// Contribute monthly until the retirement age, then split the corpus
///
/// `annual_return` is an annual decimal. Past the retirement age nothing is
/// contributed and every figure is zero. A horizon longer than
/// `MAX_HORIZON_YEARS` is an invalid scenario.
pub fn nps_projection_with(
    assumptions: &NpsAssumptions,
    current_age: u32,
    monthly_contribution: f64,
    annual_return: f64,
) -> CalcResult<NpsProjection> {
    let years_to_retirement = assumptions.retirement_age.saturating_sub(current_age);
    let months = horizon_months("years to retirement", years_to_retirement)?;
    let monthly_rate = finite_or_zero(annual_return) / 12.0;
    let contribution = finite_or_zero(monthly_contribution);

    let corpus = recurring_contribution_future_value(contribution, monthly_rate, months);
    let lump_sum = corpus * assumptions.lump_sum_fraction;
    let annuity_corpus = corpus - lump_sum;

    Ok(NpsProjection {
        years_to_retirement,
        total_contribution: contribution * f64::from(months),
        corpus,
        lump_sum,
        annuity_corpus,
        monthly_pension: annuity_corpus * assumptions.annuity_rate / 12.0,
        series: sip_growth_series(contribution, monthly_rate, years_to_retirement),
    })
}
