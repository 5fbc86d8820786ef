//! Ideal body weight formulas and adult height prediction

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::health::bmi::{healthy_weight_range, WeightRange};
use crate::types::Gender;

const CM_PER_INCH: f64 = 2.54;
const FIVE_FEET_INCHES: f64 = 60.0;

/// Mid-parental adjustment in centimetres
pub const MID_PARENTAL_ADJUSTMENT_CM: f64 = 13.0;

/// Half-width of the predicted adult height band
pub const HEIGHT_RANGE_CM: f64 = 10.0;

/// Published ideal body weight formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdealWeightMethod {
    Robinson,
    Miller,
    Devine,
    Hamwi,
}

impl IdealWeightMethod {
    pub const ALL: [IdealWeightMethod; 4] = [
        IdealWeightMethod::Robinson,
        IdealWeightMethod::Miller,
        IdealWeightMethod::Devine,
        IdealWeightMethod::Hamwi,
    ];

    /// `(base_kg, kg_per_inch_over_five_feet)`
    fn constants(self, gender: Gender) -> (f64, f64) {
        match (self, gender) {
            (IdealWeightMethod::Robinson, Gender::Male) => (52.0, 1.9),
            (IdealWeightMethod::Robinson, Gender::Female) => (49.0, 1.7),
            (IdealWeightMethod::Miller, Gender::Male) => (56.2, 1.41),
            (IdealWeightMethod::Miller, Gender::Female) => (53.1, 1.36),
            (IdealWeightMethod::Devine, Gender::Male) => (50.0, 2.3),
            (IdealWeightMethod::Devine, Gender::Female) => (45.5, 2.3),
            (IdealWeightMethod::Hamwi, Gender::Male) => (48.0, 2.7),
            (IdealWeightMethod::Hamwi, Gender::Female) => (45.5, 2.2),
        }
    }
}

impl fmt::Display for IdealWeightMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdealWeightMethod::Robinson => write!(f, "Robinson"),
            IdealWeightMethod::Miller => write!(f, "Miller"),
            IdealWeightMethod::Devine => write!(f, "Devine"),
            IdealWeightMethod::Hamwi => write!(f, "Hamwi"),
        }
    }
}

/// Ideal weight in kg: `base + factor * max(0, inches - 60)`
pub fn ideal_weight(height_cm: f64, gender: Gender, method: IdealWeightMethod) -> f64 {
    let (base, per_inch) = method.constants(gender);
    let inches_over = (height_cm / CM_PER_INCH - FIVE_FEET_INCHES).max(0.0);
    base + per_inch * inches_over
}

/// All four ideal weights plus the BMI healthy range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightReport {
    pub estimates: Vec<(IdealWeightMethod, f64)>,
    pub healthy_range: WeightRange,
}

pub fn ideal_weight_report(height_cm: f64, gender: Gender) -> IdealWeightReport {
    IdealWeightReport {
        estimates: IdealWeightMethod::ALL
            .iter()
            .map(|&method| (method, ideal_weight(height_cm, gender, method)))
            .collect(),
        healthy_range: healthy_weight_range(height_cm),
    }
}

/// Predicted adult height with a ±10 cm band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightPrediction {
    pub predicted_cm: f64,
    pub min_cm: f64,
    pub max_cm: f64,
}

/// Mid-parental height: `(father + mother ± 13) / 2`, plus for boys
pub fn predict_child_height(father_cm: f64, mother_cm: f64, child: Gender) -> HeightPrediction {
    let adjustment = match child {
        Gender::Male => MID_PARENTAL_ADJUSTMENT_CM,
        Gender::Female => -MID_PARENTAL_ADJUSTMENT_CM,
    };
    let predicted_cm = (father_cm + mother_cm + adjustment) / 2.0;

    HeightPrediction {
        predicted_cm,
        min_cm: predicted_cm - HEIGHT_RANGE_CM,
        max_cm: predicted_cm + HEIGHT_RANGE_CM,
    }
}
