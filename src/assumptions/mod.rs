//! Actuarial assumptions: the life expectancy table and how to apply it

mod expectancy;
pub mod loader;

pub use expectancy::{AgeRangePolicy, LifeExpectancyTable, MAX_TABLE_AGE, MEDICAID_SOURCE};
pub use loader::{load_table, load_table_from_reader, write_table};

use std::path::Path;

use crate::error::Result;
use crate::person::Sex;

/// Container for all projection assumptions
#[derive(Debug, Clone, Default)]
pub struct Assumptions {
    pub expectancy: LifeExpectancyTable,
    pub age_range: AgeRangePolicy,
}

impl Assumptions {
    /// Built-in Medicaid table, rejecting ages past its end
    pub fn medicaid() -> Self {
        Self::default()
    }

    /// Load the expectancy table from a CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self {
            expectancy: load_table(path)?,
            age_range: AgeRangePolicy::default(),
        })
    }

    pub fn with_age_range(mut self, policy: AgeRangePolicy) -> Self {
        self.age_range = policy;
        self
    }

    /// Remaining-years expectancy under the configured range policy
    pub fn remaining_years(&self, age: u32, sex: Sex) -> Result<f64> {
        self.expectancy.lookup(age, sex, self.age_range)
    }
}
