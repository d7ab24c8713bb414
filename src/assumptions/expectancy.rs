//! Remaining-life expectancy tables by age and sex
//!
//! The built-in table is the NY State Medicaid life expectancy table
//! (06 ADM-5, attachment VIII): expected additional years of life for each
//! attained age 0-119, separately for females and males.

use crate::error::{ProjectionError, Result};
use crate::person::Sex;

/// Highest attained age in the built-in table
pub const MAX_TABLE_AGE: u32 = 119;

/// Label the report uses for the built-in table
pub const MEDICAID_SOURCE: &str = "medicaid's";

/// What to do when the attained age is past the end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeRangePolicy {
    /// Fail with `ProjectionError::AgeOutOfRange`
    #[default]
    Reject,
    /// Use the row for the oldest age in the table
    Clamp,
}

/// Remaining-years expectancy indexed by attained age
#[derive(Debug, Clone)]
pub struct LifeExpectancyTable {
    /// Expectancy in years by age (index = age)
    /// Stored as (female_years, male_years)
    rows: Vec<(f64, f64)>,

    /// Possessive label naming the table source in the report
    source: String,
}

impl LifeExpectancyTable {
    /// The built-in Medicaid table
    pub fn medicaid() -> Self {
        Self {
            rows: MEDICAID_ROWS.to_vec(),
            source: MEDICAID_SOURCE.to_string(),
        }
    }

    /// Create a table from (female, male) rows indexed by age
    pub fn new(rows: Vec<(f64, f64)>, source: impl Into<String>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ProjectionError::InvalidTable("table has no rows".to_string()));
        }

        for (age, &(female, male)) in rows.iter().enumerate() {
            if !(female.is_finite() && male.is_finite()) || female < 0.0 || male < 0.0 {
                return Err(ProjectionError::InvalidTable(format!(
                    "age {} has invalid expectancy ({}, {})",
                    age, female, male
                )));
            }
        }

        Ok(Self {
            rows,
            source: source.into(),
        })
    }

    /// Oldest age covered by the table
    pub fn max_age(&self) -> u32 {
        (self.rows.len() - 1) as u32
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Iterate over (age, female_years, male_years)
    pub fn rows(&self) -> impl Iterator<Item = (u32, f64, f64)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(age, &(female, male))| (age as u32, female, male))
    }

    /// Raw table value, `None` past the end of the table
    pub fn expectancy(&self, age: u32, sex: Sex) -> Option<f64> {
        let (female, male) = *self.rows.get(age as usize)?;
        Some(match sex {
            Sex::Female => female,
            Sex::Male => male,
        })
    }

    /// Remaining-years expectancy for an attained age
    ///
    /// Ages past `max_age()` are rejected or clamped according to `policy`.
    pub fn lookup(&self, age: u32, sex: Sex, policy: AgeRangePolicy) -> Result<f64> {
        if let Some(years) = self.expectancy(age, sex) {
            return Ok(years);
        }

        match policy {
            AgeRangePolicy::Reject => Err(ProjectionError::AgeOutOfRange {
                age,
                max_age: self.max_age(),
            }),
            AgeRangePolicy::Clamp => {
                log::warn!(
                    "Age {} is past the end of the table, using age {}",
                    age,
                    self.max_age()
                );
                // rows is never empty
                Ok(self.expectancy(self.max_age(), sex).unwrap_or_default())
            }
        }
    }
}

impl Default for LifeExpectancyTable {
    fn default() -> Self {
        Self::medicaid()
    }
}

/// Medicaid life expectancy by age, (female, male)
const MEDICAID_ROWS: [(f64, f64); MAX_TABLE_AGE as usize + 1] = [
    // Age 0-9
    (79.45, 74.14), (78.94, 73.70), (77.97, 72.74), (77.00, 71.77), (76.01, 70.79),
    (75.03, 69.81), (74.04, 68.82), (73.05, 67.83), (72.06, 66.84), (71.07, 65.85),
    // Age 10-19
    (70.08, 64.86), (69.09, 63.87), (68.09, 62.88), (67.10, 61.89), (66.11, 60.91),
    (65.13, 59.93), (64.15, 58.97), (63.17, 58.02), (62.20, 57.07), (61.22, 56.14),
    // Age 20-29
    (60.25, 55.20), (59.28, 54.27), (58.30, 53.35), (57.33, 52.42), (56.36, 51.50),
    (55.39, 50.57), (54.41, 49.64), (53.44, 48.71), (52.47, 47.77), (51.50, 46.84),
    // Age 30-39
    (50.53, 45.90), (49.56, 44.96), (48.60, 44.03), (47.63, 43.09), (46.67, 42.16),
    (45.71, 41.23), (44.76, 40.30), (43.80, 39.38), (42.86, 38.46), (41.91, 37.55),
    // Age 40-49
    (40.97, 36.64), (40.03, 35.73), (39.09, 34.83), (38.16, 33.94), (37.23, 33.05),
    (36.31, 32.16), (35.39, 31.29), (34.47, 30.42), (33.56, 29.56), (32.65, 28.70),
    // Age 50-59
    (31.75, 27.85), (30.85, 27.00), (29.95, 26.16), (29.07, 25.32), (28.18, 24.50),
    (27.31, 23.68), (26.44, 22.86), (25.58, 22.06), (24.73, 21.27), (23.89, 20.49),
    // Age 60-69
    (23.06, 19.72), (22.24, 18.96), (21.43, 18.21), (20.63, 17.48), (19.84, 16.76),
    (19.06, 16.05), (18.30, 15.36), (17.54, 14.68), (16.80, 14.02), (16.07, 13.38),
    // Age 70-79
    (15.35, 12.75), (14.65, 12.13), (13.96, 11.53), (13.28, 10.95), (12.62, 10.38),
    (11.97, 9.83), (11.33, 9.29), (10.71, 8.77), (10.11, 8.27), (9.52, 7.78),
    // Age 80-89
    (8.95, 7.31), (8.40, 6.85), (7.87, 6.42), (7.36, 6.00), (6.88, 5.61),
    (6.42, 5.24), (5.98, 4.89), (5.56, 4.56), (5.17, 4.25), (4.81, 3.97),
    // Age 90-99
    (4.47, 3.70), (4.15, 3.45), (3.86, 3.22), (3.59, 3.01), (3.35, 2.82),
    (3.13, 2.64), (2.93, 2.49), (2.75, 2.35), (2.58, 2.22), (2.43, 2.11),
    // Age 100-109
    (2.29, 2.00), (2.15, 1.89), (2.02, 1.79), (1.89, 1.69), (1.77, 1.59),
    (1.66, 1.50), (1.55, 1.41), (1.44, 1.33), (1.34, 1.25), (1.25, 1.17),
    // Age 110-119
    (1.16, 1.10), (1.07, 1.03), (0.99, 0.96), (0.91, 0.89), (0.84, 0.83),
    (0.77, 0.77), (0.71, 0.71), (0.66, 0.66), (0.61, 0.61), (0.56, 0.56),];
