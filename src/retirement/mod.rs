//! Retirement planning: corpus sizing, NPS projection and gratuity

pub mod gratuity;
pub mod nps;
pub mod plan;

pub use gratuity::*;
pub use nps::*;
pub use plan::*;
