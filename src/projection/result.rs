//! Projection output record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::person::Sex;

/// Outcome of projecting one person's lifespan as of a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    // Inputs
    pub as_of: NaiveDate,
    pub birth_date: NaiveDate,
    pub sex: Sex,

    // Age
    pub age_in_days: u32,
    pub age_in_years: u32,
    /// Days lived divided by 365
    pub years_lived: f64,

    // Expectancy
    pub remaining_expectancy_years: f64,
    /// Age in years plus remaining expectancy
    pub projected_lifespan_years: f64,
    pub projected_death_date: NaiveDate,
    pub projected_days_remaining: u32,

    /// Possessive label of the expectancy table source
    pub table_source: String,
}
