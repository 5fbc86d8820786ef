//! Type 2 diabetes risk score

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest score the questionnaire can produce
pub const MAX_RISK_SCORE: u32 = 30;

/// Answers to the risk questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiabetesRiskInputs {
    pub age_years: f64,
    pub bmi: f64,
    pub waist_cm: f64,
    pub family_history: bool,
    pub high_blood_pressure: bool,
    pub physically_active: bool,
}

/// Severity tier keyed by cumulative score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    SlightlyElevated,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// `<=10` low, `<=16` slightly elevated, `<=22` moderate, `<=27` high
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=10 => RiskLevel::Low,
            11..=16 => RiskLevel::SlightlyElevated,
            17..=22 => RiskLevel::Moderate,
            23..=27 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            RiskLevel::Low => &[
                "Continue regular physical activity",
                "Maintain a balanced diet",
                "Annual health check-ups recommended",
            ],
            RiskLevel::SlightlyElevated => &[
                "Get your blood sugar tested regularly",
                "Aim for 30 minutes of daily exercise",
                "Reduce sugar and refined carbs intake",
                "Maintain a healthy weight",
            ],
            RiskLevel::Moderate | RiskLevel::High => &[
                "Schedule a doctor's appointment soon",
                "Get HbA1c test done",
                "Start lifestyle modifications immediately",
                "Monitor your diet closely",
                "Consider a diabetes prevention program",
            ],
            RiskLevel::VeryHigh => &[
                "Consult a doctor immediately",
                "Get complete diabetes screening",
                "Start a structured diet plan",
                "Begin a supervised exercise program",
                "Regular blood sugar monitoring required",
            ],
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low Risk"),
            RiskLevel::SlightlyElevated => write!(f, "Slightly Elevated"),
            RiskLevel::Moderate => write!(f, "Moderate Risk"),
            RiskLevel::High => write!(f, "High Risk"),
            RiskLevel::VeryHigh => write!(f, "Very High Risk"),
        }
    }
}

/// Scored questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiabetesRiskAssessment {
    pub score: u32,
    /// Score as a percentage of [`MAX_RISK_SCORE`]
    pub percentage: f64,
    pub level: RiskLevel,
    pub recommendations: Vec<String>,
}

fn age_points(age: f64) -> u32 {
    if age >= 65.0 {
        7
    } else if age >= 55.0 {
        5
    } else if age >= 45.0 {
        3
    } else {
        0
    }
}

fn bmi_points(bmi: f64) -> u32 {
    if bmi >= 35.0 {
        7
    } else if bmi >= 30.0 {
        4
    } else if bmi >= 25.0 {
        2
    } else {
        0
    }
}

fn waist_points(waist_cm: f64) -> u32 {
    if waist_cm >= 100.0 {
        5
    } else if waist_cm >= 90.0 {
        3
    } else {
        0
    }
}

/// Weighted point sum over the questionnaire
pub fn diabetes_risk_score(inputs: &DiabetesRiskInputs) -> u32 {
    let mut score = age_points(inputs.age_years)
        + bmi_points(inputs.bmi)
        + waist_points(inputs.waist_cm);

    if inputs.family_history {
        score += 5;
    }
    if inputs.high_blood_pressure {
        score += 3;
    }
    if !inputs.physically_active {
        score += 3;
    }

    score
}

pub fn assess_diabetes_risk(inputs: &DiabetesRiskInputs) -> DiabetesRiskAssessment {
    let score = diabetes_risk_score(inputs);
    let level = RiskLevel::from_score(score);

    DiabetesRiskAssessment {
        score,
        percentage: f64::from(score) / f64::from(MAX_RISK_SCORE) * 100.0,
        level,
        recommendations: level
            .recommendations()
            .iter()
            .map(|line| line.to_string())
            .collect(),
    }
}
