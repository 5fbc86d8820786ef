//! Tax calculations on exact decimal amounts

pub mod income;

pub use income::*;
