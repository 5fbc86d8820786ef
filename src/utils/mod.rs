//! Utility modules

pub mod memory_cache;
pub mod non_finite;
pub mod validation;

pub use memory_cache::*;
pub use validation::*;
