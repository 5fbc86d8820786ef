//! # Calculator Core
//!
//! Numeric engine behind a suite of personal finance and health calculators,
//! with Indian-numbering currency formatting.
//!
//! ## Features
//!
//! - **Formatting**: ₹ amounts with lakh/crore grouping and L/Cr/Arab/Kharab abbreviations
//! - **Growth**: compound and simple interest, SIP, RD, PPF and FD, with overflow-safe
//!   long horizons
//! - **Loans**: EMI, amortization schedules, eligibility and part-prepayment impact
//! - **Retirement**: corpus sizing with SIP back-solve, NPS projection and gratuity
//! - **Tax**: old vs new regime income tax on exact decimals
//! - **Health**: BMI, BMR, calorie targets, ideal weight, child height, walking MET and
//!   diabetes risk
//! - **Engine**: JSON request dispatch with a pluggable result cache
//!
//! ## Quick Start
//!
//! ```rust
//! use calculator_core::{amortized_payment, format_currency};
//!
//! let emi = amortized_payment(1_000_000.0, 0.10 / 12.0, 60);
//! assert_eq!(format_currency(emi, 0), "₹21,247");
//! ```

pub mod config;
pub mod engine;
pub mod format;
pub mod growth;
pub mod health;
pub mod loan;
pub mod registry;
pub mod retirement;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use engine::*;
pub use format::*;
pub use growth::*;
pub use health::*;
pub use loan::*;
pub use registry::*;
pub use retirement::*;
pub use tax::*;
pub use traits::*;
pub use types::*;
