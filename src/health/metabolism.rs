//! Basal metabolic rate and daily calorie needs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Gender;

/// Daily deficit or surplus used for weight-loss and weight-gain targets
pub const CALORIE_ADJUSTMENT: f64 = 500.0;

/// Activity level with a fixed TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days a week
    Light,
    /// 3-5 days a week
    Moderate,
    /// 6-7 days a week
    Active,
    /// Athlete or physical job
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        };
        write!(f, "{}", label)
    }
}

/// Mifflin-St Jeor BMR in kcal/day
///
/// `10*weight + 6.25*height - 5*age`, then `+5` for men and `-161` for women.
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// `bmr * activity.multiplier()`
pub fn daily_calorie_need(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Calories per day at every activity level
pub fn activity_table(bmr: f64) -> Vec<(ActivityLevel, f64)> {
    ActivityLevel::ALL
        .iter()
        .map(|&level| (level, daily_calorie_need(bmr, level)))
        .collect()
}

/// Maintenance, loss and gain targets for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieTargets {
    pub bmr: f64,
    pub maintenance: f64,
    pub weight_loss: f64,
    pub weight_gain: f64,
}

pub fn calorie_targets(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    gender: Gender,
    activity: ActivityLevel,
) -> CalorieTargets {
    let bmr = bmr(weight_kg, height_cm, age_years, gender);
    let maintenance = daily_calorie_need(bmr, activity);

    CalorieTargets {
        bmr,
        maintenance,
        weight_loss: maintenance - CALORIE_ADJUSTMENT,
        weight_gain: maintenance + CALORIE_ADJUSTMENT,
    }
}
