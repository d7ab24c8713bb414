//! Error types for lifespan projections

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while building inputs or running a projection
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Invalid birth date '{0}': expected YYYY-MM-DD")]
    InvalidBirthDate(String),

    #[error("Invalid sex '{0}': expected 'f' or 'm'")]
    InvalidSex(String),

    #[error("Birth date {birth} is after the as-of date {as_of}")]
    BirthAfterAsOf { birth: NaiveDate, as_of: NaiveDate },

    #[error("Age {age} is outside the supported table range 0..={max_age}")]
    AgeOutOfRange { age: u32, max_age: u32 },

    #[error("Date arithmetic overflowed: {0}")]
    DateOverflow(String),

    #[error("Expectancy table CSV error: {0}")]
    TableCsv(#[from] csv::Error),

    #[error("Invalid expectancy table: {0}")]
    InvalidTable(String),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
