//! Health formulas: BMI, metabolic rate, body measures, walking and diabetes risk
//!
//! Weights are in kilograms and heights in centimetres throughout.

pub mod bmi;
pub mod body;
pub mod diabetes;
pub mod metabolism;
pub mod walking;

pub use bmi::*;
pub use body::*;
pub use diabetes::*;
pub use metabolism::*;
pub use walking::*;
