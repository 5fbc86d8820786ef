//! Loan models: EMI, reverse EMI, amortization schedule and prepayment

pub mod emi;
pub mod prepayment;

pub use emi::*;
pub use prepayment::*;
