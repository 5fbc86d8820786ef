//! Gratuity payable on leaving employment

use crate::utils::validation::finite_or_zero;

/// Days of wages paid per completed year of service
pub const GRATUITY_DAYS_PER_YEAR: f64 = 15.0;

/// Working days in a month used by the gratuity formula
pub const WORKING_DAYS_PER_MONTH: f64 = 26.0;

/// `(last_drawn_salary * 15 * years_of_service) / 26`
///
/// `last_drawn_salary` is the monthly basic salary plus dearness allowance.
pub fn gratuity(last_drawn_salary: f64, years_of_service: u32) -> f64 {
    finite_or_zero(last_drawn_salary) * GRATUITY_DAYS_PER_YEAR * f64::from(years_of_service)
        / WORKING_DAYS_PER_MONTH
}
