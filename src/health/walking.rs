//! Calories burned walking, using a MET model

use serde::{Deserialize, Serialize};

/// Average stride on flat ground in metres
pub const BASE_STRIDE_M: f64 = 0.75;

/// Stride lost per percent of incline
pub const STRIDE_LOSS_PER_INCLINE_PERCENT: f64 = 0.01;

/// Base MET for a walking speed in km/h
///
/// Brackets: `<3.5` 2.0, `<4.5` 3.0, `<5.5` 3.5, `<6.5` 4.3, else 5.0.
pub fn base_met(speed_kmh: f64) -> f64 {
    if speed_kmh < 3.5 {
        2.0
    } else if speed_kmh < 4.5 {
        3.0
    } else if speed_kmh < 5.5 {
        3.5
    } else if speed_kmh < 6.5 {
        4.3
    } else {
        5.0
    }
}

/// Base MET plus 0.5 MET for every 5% of incline
pub fn met(speed_kmh: f64, incline_percent: f64) -> f64 {
    base_met(speed_kmh) + (incline_percent / 5.0) * 0.5
}

/// Outcome of a timed walk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkingEstimate {
    pub met: f64,
    /// Rounded to whole kcal
    pub calories: f64,
    pub distance_km: f64,
    /// Rounded to whole steps
    pub steps: f64,
}

/// Calories, distance and steps for a walk of `duration_minutes`
pub fn walking_estimate(
    weight_kg: f64,
    duration_minutes: f64,
    speed_kmh: f64,
    incline_percent: f64,
) -> WalkingEstimate {
    let met = met(speed_kmh, incline_percent);
    let hours = duration_minutes / 60.0;
    let distance_km = speed_kmh * hours;
    let stride_m = BASE_STRIDE_M - incline_percent * STRIDE_LOSS_PER_INCLINE_PERCENT;

    WalkingEstimate {
        met,
        calories: (met * weight_kg * hours).round(),
        distance_km,
        steps: (distance_km * 1000.0 / stride_m).round(),
    }
}

/// Calories for covering `distance_km` at `speed_kmh` on flat ground
///
/// A zero speed means no time is spent walking and burns nothing.
pub fn walking_calories_for_distance(weight_kg: f64, distance_km: f64, speed_kmh: f64) -> f64 {
    if speed_kmh <= 0.0 {
        return 0.0;
    }
    base_met(speed_kmh) * weight_kg * (distance_km / speed_kmh)
}
