//! Body mass index and its categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the normal BMI band
pub const HEALTHY_BMI_MIN: f64 = 18.5;

/// Upper bound of the normal BMI band as reported to users
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// BMI category
///
/// Boundary values belong to the higher category: 18.5 is normal and 25 is
/// overweight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value using strict `<` thresholds
    ///
    /// `NaN` fails every comparison and lands in `Obese`.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < HEALTHY_BMI_MIN {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Normal => write!(f, "Normal"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}

/// `weight / height_m^2`
///
/// Inputs are not sanitized. A zero height gives an infinite BMI, which
/// [`BmiCategory::from_bmi`] places in `Obese`; zero weight and zero height
/// give `NaN`, which lands there too.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Category for a BMI value
pub fn bmi_category(bmi: f64) -> BmiCategory {
    BmiCategory::from_bmi(bmi)
}

/// Weight range in kilograms for a normal BMI at the given height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

pub fn healthy_weight_range(height_cm: f64) -> WeightRange {
    let height_m = height_cm / 100.0;
    let square = height_m * height_m;
    WeightRange {
        min_kg: HEALTHY_BMI_MIN * square,
        max_kg: HEALTHY_BMI_MAX * square,
    }
}
