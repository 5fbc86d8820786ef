//! Closed registry of calculators and JSON-friendly dispatch
//!
//! Requests carry rates as annual percentages, the way a form collects them;
//! [`evaluate`] converts them to the decimal and periodic rates the formula
//! modules expect.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::EngineConfig;
use crate::growth::*;
use crate::health::*;
use crate::loan::*;
use crate::retirement::*;
use crate::tax::{compare_regimes, TaxComparison, TaxDeductions};
use crate::types::*;
use crate::utils::validation::{horizon_months, validate_horizon_months, validate_horizon_years};

/// Every calculator the engine offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorKind {
    Sip,
    CompoundInterest,
    Fd,
    Rd,
    Ppf,
    Nps,
    SimpleInterest,
    Emi,
    HomeLoanEmi,
    CarLoanEmi,
    PersonalLoanEmi,
    LoanEligibility,
    LoanPrepayment,
    Retirement,
    IncomeTax,
    Gratuity,
    Bmi,
    Bmr,
    Calorie,
    IdealWeight,
    ChildHeight,
    WalkCalorieBurn,
    DiabetesRisk,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 23] = [
        CalculatorKind::Sip,
        CalculatorKind::CompoundInterest,
        CalculatorKind::Fd,
        CalculatorKind::Rd,
        CalculatorKind::Ppf,
        CalculatorKind::Nps,
        CalculatorKind::SimpleInterest,
        CalculatorKind::Emi,
        CalculatorKind::HomeLoanEmi,
        CalculatorKind::CarLoanEmi,
        CalculatorKind::PersonalLoanEmi,
        CalculatorKind::LoanEligibility,
        CalculatorKind::LoanPrepayment,
        CalculatorKind::Retirement,
        CalculatorKind::IncomeTax,
        CalculatorKind::Gratuity,
        CalculatorKind::Bmi,
        CalculatorKind::Bmr,
        CalculatorKind::Calorie,
        CalculatorKind::IdealWeight,
        CalculatorKind::ChildHeight,
        CalculatorKind::WalkCalorieBurn,
        CalculatorKind::DiabetesRisk,
    ];

    /// Stable identifier used in requests and URLs
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorKind::Sip => "sip",
            CalculatorKind::CompoundInterest => "compound-interest",
            CalculatorKind::Fd => "fd",
            CalculatorKind::Rd => "rd",
            CalculatorKind::Ppf => "ppf",
            CalculatorKind::Nps => "nps",
            CalculatorKind::SimpleInterest => "simple-interest",
            CalculatorKind::Emi => "emi",
            CalculatorKind::HomeLoanEmi => "home-loan-emi",
            CalculatorKind::CarLoanEmi => "car-loan-emi",
            CalculatorKind::PersonalLoanEmi => "personal-loan-emi",
            CalculatorKind::LoanEligibility => "loan-eligibility",
            CalculatorKind::LoanPrepayment => "loan-prepayment",
            CalculatorKind::Retirement => "retirement",
            CalculatorKind::IncomeTax => "income-tax",
            CalculatorKind::Gratuity => "gratuity",
            CalculatorKind::Bmi => "bmi",
            CalculatorKind::Bmr => "bmr",
            CalculatorKind::Calorie => "calorie",
            CalculatorKind::IdealWeight => "ideal-weight",
            CalculatorKind::ChildHeight => "child-height",
            CalculatorKind::WalkCalorieBurn => "walk-calorie-burn",
            CalculatorKind::DiabetesRisk => "diabetes-risk",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::Sip => "SIP Calculator",
            CalculatorKind::CompoundInterest => "Compound Interest Calculator",
            CalculatorKind::Fd => "Fixed Deposit Calculator",
            CalculatorKind::Rd => "Recurring Deposit Calculator",
            CalculatorKind::Ppf => "PPF Calculator",
            CalculatorKind::Nps => "NPS Calculator",
            CalculatorKind::SimpleInterest => "Simple Interest Calculator",
            CalculatorKind::Emi => "EMI Calculator",
            CalculatorKind::HomeLoanEmi => "Home Loan EMI Calculator",
            CalculatorKind::CarLoanEmi => "Car Loan EMI Calculator",
            CalculatorKind::PersonalLoanEmi => "Personal Loan EMI Calculator",
            CalculatorKind::LoanEligibility => "Loan Eligibility Calculator",
            CalculatorKind::LoanPrepayment => "Loan Prepayment Calculator",
            CalculatorKind::Retirement => "Retirement Planning Calculator",
            CalculatorKind::IncomeTax => "Income Tax Calculator",
            CalculatorKind::Gratuity => "Gratuity Calculator",
            CalculatorKind::Bmi => "BMI Calculator",
            CalculatorKind::Bmr => "BMR Calculator",
            CalculatorKind::Calorie => "Calorie Calculator",
            CalculatorKind::IdealWeight => "Ideal Weight Calculator",
            CalculatorKind::ChildHeight => "Child Height Predictor",
            CalculatorKind::WalkCalorieBurn => "Walking Calorie Burn Calculator",
            CalculatorKind::DiabetesRisk => "Diabetes Risk Calculator",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| CalcError::UnknownCalculator(s.to_string()))
    }
}

/// Raw inputs for one calculator, tagged by its slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum CalculationRequest {
    Sip {
        monthly_investment: f64,
        annual_return: RatePercent,
        years: u32,
    },
    CompoundInterest {
        principal: f64,
        annual_rate: RatePercent,
        compounding_per_year: u32,
        years: u32,
    },
    Fd {
        principal: f64,
        annual_rate: RatePercent,
        frequency: CompoundingFrequency,
        years: u32,
    },
    Rd {
        monthly_deposit: f64,
        annual_rate: RatePercent,
        months: u32,
    },
    Ppf {
        yearly_deposit: f64,
        annual_rate: RatePercent,
        years: u32,
    },
    Nps {
        current_age: u32,
        monthly_contribution: f64,
        annual_return: RatePercent,
    },
    SimpleInterest {
        principal: f64,
        annual_rate: RatePercent,
        years: u32,
    },
    Emi {
        principal: f64,
        annual_rate: RatePercent,
        months: u32,
    },
    HomeLoanEmi {
        property_price: f64,
        down_payment: f64,
        annual_rate: RatePercent,
        years: u32,
    },
    CarLoanEmi {
        car_price: f64,
        down_payment: f64,
        annual_rate: RatePercent,
        years: u32,
    },
    PersonalLoanEmi {
        principal: f64,
        annual_rate: RatePercent,
        years: u32,
    },
    LoanEligibility {
        monthly_income: f64,
        existing_emi: f64,
        annual_rate: RatePercent,
        years: u32,
        foir_percent: f64,
    },
    LoanPrepayment {
        outstanding: f64,
        annual_rate: RatePercent,
        remaining_months: u32,
        prepayment: f64,
    },
    Retirement {
        current_age: u32,
        retirement_age: u32,
        monthly_expense: f64,
        inflation: RatePercent,
        expected_return: RatePercent,
    },
    IncomeTax {
        gross_income: BigDecimal,
        #[serde(default)]
        deductions: TaxDeductions,
    },
    Gratuity {
        last_drawn_salary: f64,
        years_of_service: u32,
    },
    Bmi {
        weight_kg: f64,
        height_cm: f64,
    },
    Bmr {
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
        gender: Gender,
    },
    Calorie {
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
        gender: Gender,
        activity: ActivityLevel,
    },
    IdealWeight {
        height_cm: f64,
        gender: Gender,
    },
    ChildHeight {
        father_height_cm: f64,
        mother_height_cm: f64,
        gender: Gender,
    },
    WalkCalorieBurn {
        weight_kg: f64,
        duration_minutes: f64,
        speed_kmh: f64,
        #[serde(default)]
        incline_percent: f64,
    },
    DiabetesRisk(DiabetesRiskInputs),
}

impl CalculationRequest {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationRequest::Sip { .. } => CalculatorKind::Sip,
            CalculationRequest::CompoundInterest { .. } => CalculatorKind::CompoundInterest,
            CalculationRequest::Fd { .. } => CalculatorKind::Fd,
            CalculationRequest::Rd { .. } => CalculatorKind::Rd,
            CalculationRequest::Ppf { .. } => CalculatorKind::Ppf,
            CalculationRequest::Nps { .. } => CalculatorKind::Nps,
            CalculationRequest::SimpleInterest { .. } => CalculatorKind::SimpleInterest,
            CalculationRequest::Emi { .. } => CalculatorKind::Emi,
            CalculationRequest::HomeLoanEmi { .. } => CalculatorKind::HomeLoanEmi,
            CalculationRequest::CarLoanEmi { .. } => CalculatorKind::CarLoanEmi,
            CalculationRequest::PersonalLoanEmi { .. } => CalculatorKind::PersonalLoanEmi,
            CalculationRequest::LoanEligibility { .. } => CalculatorKind::LoanEligibility,
            CalculationRequest::LoanPrepayment { .. } => CalculatorKind::LoanPrepayment,
            CalculationRequest::Retirement { .. } => CalculatorKind::Retirement,
            CalculationRequest::IncomeTax { .. } => CalculatorKind::IncomeTax,
            CalculationRequest::Gratuity { .. } => CalculatorKind::Gratuity,
            CalculationRequest::Bmi { .. } => CalculatorKind::Bmi,
            CalculationRequest::Bmr { .. } => CalculatorKind::Bmr,
            CalculationRequest::Calorie { .. } => CalculatorKind::Calorie,
            CalculationRequest::IdealWeight { .. } => CalculatorKind::IdealWeight,
            CalculationRequest::ChildHeight { .. } => CalculatorKind::ChildHeight,
            CalculationRequest::WalkCalorieBurn { .. } => CalculatorKind::WalkCalorieBurn,
            CalculationRequest::DiabetesRisk(_) => CalculatorKind::DiabetesRisk,
        }
    }

    /// Parse a request from its JSON form
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Canonical JSON used as the cache key
    pub fn cache_key(&self) -> CalcResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Result of a calculator, including any chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum CalculationOutcome {
    Growth {
        #[serde(with = "crate::utils::non_finite")]
        invested: f64,
        #[serde(with = "crate::utils::non_finite")]
        maturity_value: f64,
        #[serde(with = "crate::utils::non_finite")]
        gain: f64,
        series: GrowthSeries,
    },
    Nps(NpsProjection),
    Loan {
        #[serde(with = "crate::utils::non_finite")]
        financed_amount: f64,
        summary: LoanSummary,
        schedule: Vec<AmortizationYear>,
    },
    LoanEligibility(LoanEligibility),
    Prepayment(PrepaymentImpact),
    Retirement {
        plan: RetirementPlan,
        series: GrowthSeries,
    },
    IncomeTax(TaxComparison),
    Gratuity {
        amount: f64,
    },
    Bmi {
        #[serde(with = "crate::utils::non_finite")]
        bmi: f64,
        category: BmiCategory,
        healthy_range: WeightRange,
    },
    Bmr {
        bmr: f64,
        by_activity: Vec<(ActivityLevel, f64)>,
    },
    Calorie(CalorieTargets),
    IdealWeight(IdealWeightReport),
    ChildHeight(HeightPrediction),
    Walking(WalkingEstimate),
    DiabetesRisk(DiabetesRiskAssessment),
}

impl CalculationOutcome {
    fn growth(invested: f64, maturity_value: f64, series: GrowthSeries) -> Self {
        CalculationOutcome::Growth {
            invested,
            maturity_value,
            gain: maturity_value - invested,
            series,
        }
    }

    fn loan(financed_amount: f64, monthly_rate: f64, months: u32) -> Self {
        CalculationOutcome::Loan {
            financed_amount,
            summary: loan_summary(financed_amount, monthly_rate, months),
            schedule: amortization_schedule(financed_amount, monthly_rate, months),
        }
    }
}

/// Run one calculator against the engine configuration
///
/// Horizons longer than `MAX_HORIZON_YEARS` are rejected as invalid
/// scenarios before any figure is computed.
pub fn evaluate(
    config: &EngineConfig,
    request: &CalculationRequest,
) -> CalcResult<CalculationOutcome> {
    tracing::debug!(calculator = %request.kind(), "evaluating calculator");

    let outcome = match request {
        CalculationRequest::Sip {
            monthly_investment,
            annual_return,
            years,
        } => {
            let months = horizon_months("years", *years)?;
            let rate = annual_return.monthly_decimal();
            CalculationOutcome::growth(
                monthly_investment * f64::from(months),
                recurring_contribution_future_value(*monthly_investment, rate, months),
                sip_growth_series(*monthly_investment, rate, *years),
            )
        }
        CalculationRequest::CompoundInterest {
            principal,
            annual_rate,
            compounding_per_year,
            years,
        } => {
            let years = validate_horizon_years("years", *years)?;
            let rate = annual_rate.as_decimal();
            CalculationOutcome::growth(
                *principal,
                compound_interest(*principal, rate, *compounding_per_year, years),
                compound_growth_series(*principal, rate, *compounding_per_year, years),
            )
        }
        CalculationRequest::Fd {
            principal,
            annual_rate,
            frequency,
            years,
        } => {
            let years = validate_horizon_years("years", *years)?;
            let per_year = frequency.periods_per_year();
            CalculationOutcome::growth(
                *principal,
                compound_interest(*principal, annual_rate.as_decimal(), per_year, years),
                compound_growth_series(*principal, annual_rate.as_decimal(), per_year, years),
            )
        }
        CalculationRequest::Rd {
            monthly_deposit,
            annual_rate,
            months,
        } => {
            let months = validate_horizon_months("months", *months)?;
            let rate = annual_rate.as_decimal();
            CalculationOutcome::growth(
                monthly_deposit * f64::from(months),
                recurring_deposit_maturity(*monthly_deposit, rate, months),
                recurring_deposit_series(*monthly_deposit, rate, months / 12),
            )
        }
        CalculationRequest::Ppf {
            yearly_deposit,
            annual_rate,
            years,
        } => {
            let years = validate_horizon_years("years", *years)?;
            CalculationOutcome::growth(
                yearly_deposit * f64::from(years),
                ppf_maturity(*yearly_deposit, annual_rate.as_decimal(), years),
                ppf_series(*yearly_deposit, annual_rate.as_decimal(), years),
            )
        }
        CalculationRequest::Nps {
            current_age,
            monthly_contribution,
            annual_return,
        } => CalculationOutcome::Nps(nps_projection_with(
            &config.nps,
            *current_age,
            *monthly_contribution,
            annual_return.as_decimal(),
        )?),
        CalculationRequest::SimpleInterest {
            principal,
            annual_rate,
            years,
        } => {
            let years = validate_horizon_years("years", *years)?;
            CalculationOutcome::growth(
                *principal,
                principal + simple_interest(*principal, annual_rate.as_decimal(), years),
                simple_interest_series(*principal, annual_rate.as_decimal(), years),
            )
        }
        CalculationRequest::Emi {
            principal,
            annual_rate,
            months,
        } => CalculationOutcome::loan(
            *principal,
            annual_rate.monthly_decimal(),
            validate_horizon_months("months", *months)?,
        ),
        CalculationRequest::HomeLoanEmi {
            property_price: price,
            down_payment,
            annual_rate,
            years,
        }
        | CalculationRequest::CarLoanEmi {
            car_price: price,
            down_payment,
            annual_rate,
            years,
        } => CalculationOutcome::loan(
            financed_amount(*price, *down_payment),
            annual_rate.monthly_decimal(),
            horizon_months("years", *years)?,
        ),
        CalculationRequest::PersonalLoanEmi {
            principal,
            annual_rate,
            years,
        } => CalculationOutcome::loan(
            *principal,
            annual_rate.monthly_decimal(),
            horizon_months("years", *years)?,
        ),
        CalculationRequest::LoanEligibility {
            monthly_income,
            existing_emi,
            annual_rate,
            years,
            foir_percent,
        } => CalculationOutcome::LoanEligibility(loan_eligibility(
            *monthly_income,
            *existing_emi,
            annual_rate.monthly_decimal(),
            horizon_months("years", *years)?,
            *foir_percent,
        )),
        CalculationRequest::LoanPrepayment {
            outstanding,
            annual_rate,
            remaining_months,
            prepayment,
        } => CalculationOutcome::Prepayment(prepayment_impact(
            *outstanding,
            annual_rate.as_decimal(),
            validate_horizon_months("remaining_months", *remaining_months)?,
            *prepayment,
        )?),
        CalculationRequest::Retirement {
            current_age,
            retirement_age,
            monthly_expense,
            inflation,
            expected_return,
        } => {
            let plan = retirement_plan_with(
                &config.retirement,
                *current_age,
                *retirement_age,
                *monthly_expense,
                inflation.as_decimal(),
                expected_return.as_decimal(),
            )?;
            CalculationOutcome::Retirement {
                series: plan.accumulation_series(),
                plan,
            }
        }
        CalculationRequest::IncomeTax {
            gross_income,
            deductions,
        } => {
            CalculationOutcome::IncomeTax(compare_regimes(&config.tax, gross_income, deductions)?)
        }
        CalculationRequest::Gratuity {
            last_drawn_salary,
            years_of_service,
        } => CalculationOutcome::Gratuity {
            amount: gratuity(*last_drawn_salary, *years_of_service),
        },
        CalculationRequest::Bmi {
            weight_kg,
            height_cm,
        } => {
            let value = bmi(*weight_kg, *height_cm);
            CalculationOutcome::Bmi {
                bmi: value,
                category: bmi_category(value),
                healthy_range: healthy_weight_range(*height_cm),
            }
        }
        CalculationRequest::Bmr {
            weight_kg,
            height_cm,
            age_years,
            gender,
        } => {
            let value = bmr(*weight_kg, *height_cm, *age_years, *gender);
            CalculationOutcome::Bmr {
                bmr: value,
                by_activity: activity_table(value),
            }
        }
        CalculationRequest::Calorie {
            weight_kg,
            height_cm,
            age_years,
            gender,
            activity,
        } => CalculationOutcome::Calorie(calorie_targets(
            *weight_kg, *height_cm, *age_years, *gender, *activity,
        )),
        CalculationRequest::IdealWeight { height_cm, gender } => {
            CalculationOutcome::IdealWeight(ideal_weight_report(*height_cm, *gender))
        }
        CalculationRequest::ChildHeight {
            father_height_cm,
            mother_height_cm,
            gender,
        } => CalculationOutcome::ChildHeight(predict_child_height(
            *father_height_cm,
            *mother_height_cm,
            *gender,
        )),
        CalculationRequest::WalkCalorieBurn {
            weight_kg,
            duration_minutes,
            speed_kmh,
            incline_percent,
        } => CalculationOutcome::Walking(walking_estimate(
            *weight_kg,
            *duration_minutes,
            *speed_kmh,
            *incline_percent,
        )),
        CalculationRequest::DiabetesRisk(inputs) => {
            CalculationOutcome::DiabetesRisk(assess_diabetes_risk(inputs))
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_round_trip() {
        for kind in CalculatorKind::ALL {
            assert_eq!(kind.slug().parse::<CalculatorKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.slug()));
        }
    }

    #[test]
    fn test_unknown_slug() {
        let err = "mortgage".parse::<CalculatorKind>().unwrap_err();
        assert_eq!(err, CalcError::UnknownCalculator("mortgage".to_string()));
    }

    #[test]
    fn test_request_tag_matches_kind() {
        let request = CalculationRequest::from_json(
            r#"{"calculator": "home-loan-emi", "property_price": 5000000,
                "down_payment": 1000000, "annual_rate": 8.5, "years": 20}"#,
        )
        .unwrap();
        assert_eq!(request.kind(), CalculatorKind::HomeLoanEmi);

        let value: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["calculator"], "home-loan-emi");
    }

    #[test]
    fn test_evaluate_sip() {
        let request = CalculationRequest::Sip {
            monthly_investment: 50_000.0,
            annual_return: RatePercent(12.0),
            years: 10,
        };

        match evaluate(&EngineConfig::default(), &request).unwrap() {
            CalculationOutcome::Growth {
                invested,
                maturity_value,
                series,
                ..
            } => {
                assert_eq!(invested, 6_000_000.0);
                assert!((maturity_value - 11_616_953.82).abs() < 1.0);
                assert_eq!(series.len(), 11);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_home_loan_uses_financed_amount() {
        let request = CalculationRequest::HomeLoanEmi {
            property_price: 1_200_000.0,
            down_payment: 200_000.0,
            annual_rate: RatePercent(10.0),
            years: 5,
        };

        match evaluate(&EngineConfig::default(), &request).unwrap() {
            CalculationOutcome::Loan {
                financed_amount,
                summary,
                schedule,
            } => {
                assert_eq!(financed_amount, 1_000_000.0);
                assert!((summary.emi - 21_247.04).abs() < 0.01);
                assert_eq!(schedule.len(), 5);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_propagates_scenario_errors() {
        let request = CalculationRequest::Retirement {
            current_age: 40,
            retirement_age: 35,
            monthly_expense: 50_000.0,
            inflation: RatePercent(6.0),
            expected_return: RatePercent(12.0),
        };
        let err = evaluate(&EngineConfig::default(), &request).unwrap_err();
        assert!(matches!(err, CalcError::InvalidScenario(_)));
    }

    #[test]
    fn test_evaluate_rejects_overlong_horizons() {
        let config = EngineConfig::default();
        let requests = [
            CalculationRequest::Sip {
                monthly_investment: 1_000.0,
                annual_return: RatePercent(12.0),
                years: 400_000_000,
            },
            CalculationRequest::Retirement {
                current_age: 0,
                retirement_age: 400_000_000,
                monthly_expense: 50_000.0,
                inflation: RatePercent(6.0),
                expected_return: RatePercent(12.0),
            },
            CalculationRequest::PersonalLoanEmi {
                principal: 100_000.0,
                annual_rate: RatePercent(12.0),
                years: u32::MAX,
            },
            CalculationRequest::Emi {
                principal: 100_000.0,
                annual_rate: RatePercent(12.0),
                months: u32::MAX,
            },
            CalculationRequest::Rd {
                monthly_deposit: 1_000.0,
                annual_rate: RatePercent(7.0),
                months: u32::MAX,
            },
            CalculationRequest::CompoundInterest {
                principal: 1_000.0,
                annual_rate: RatePercent(8.0),
                compounding_per_year: 4,
                years: u32::MAX,
            },
        ];

        for request in &requests {
            let err = evaluate(&config, request).unwrap_err();
            assert!(
                matches!(err, CalcError::InvalidScenario(_)),
                "{} returned {:?}",
                request.kind(),
                err
            );
        }
    }

    #[test]
    fn test_evaluate_accepts_longest_horizon() {
        let request = CalculationRequest::Ppf {
            yearly_deposit: 1_000.0,
            annual_rate: RatePercent(0.0),
            years: crate::utils::validation::MAX_HORIZON_YEARS,
        };

        match evaluate(&EngineConfig::default(), &request).unwrap() {
            CalculationOutcome::Growth { series, .. } => assert_eq!(series.len(), 10_001),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_diabetes_request_from_json() {
        let request = CalculationRequest::from_json(
            r#"{"calculator": "diabetes-risk", "age_years": 50, "bmi": 27.5, "waist_cm": 95,
                "family_history": true, "high_blood_pressure": false, "physically_active": false}"#,
        )
        .unwrap();

        match evaluate(&EngineConfig::default(), &request).unwrap() {
            CalculationOutcome::DiabetesRisk(assessment) => {
                assert_eq!(assessment.score, 16);
                assert_eq!(assessment.level, RiskLevel::SlightlyElevated);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
