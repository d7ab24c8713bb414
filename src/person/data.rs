//! Person data structures and input parsing

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// ISO calendar-date format accepted for birth and as-of dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Sex of the person, selecting the expectancy table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Label used in the report ("male" / "female")
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = ProjectionError;

    /// Only the exact codes `m` and `f` are accepted
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "m" => Ok(Sex::Male),
            "f" => Ok(Sex::Female),
            other => Err(ProjectionError::InvalidSex(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_birth_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
        .map_err(|_| ProjectionError::InvalidBirthDate(s.to_string()))
}

/// The subject of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Calendar date of birth
    pub birth_date: NaiveDate,

    /// Selects the male or female expectancy column
    pub sex: Sex,
}

impl Person {
    pub fn new(birth_date: NaiveDate, sex: Sex) -> Self {
        Self { birth_date, sex }
    }

    /// Build a person from raw command-line strings
    pub fn parse(birth: &str, sex: &str) -> Result<Self> {
        Ok(Self {
            birth_date: parse_birth_date(birth)?,
            sex: sex.parse()?,
        })
    }
}
