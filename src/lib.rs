//! Lifespan - projected lifespan from a birth date and an actuarial table
//!
//! This library provides:
//! - Calendar-exact age in days and anniversary-stepped age in years
//! - Remaining-life expectancy lookup by age and sex (built-in Medicaid table or CSV)
//! - Projected date of death and days remaining
//! - The plain-text report printed by the `lifespan` binary

pub mod assumptions;
pub mod error;
pub mod person;
pub mod projection;

// Re-export commonly used types
pub use assumptions::{AgeRangePolicy, Assumptions, LifeExpectancyTable};
pub use error::{ProjectionError, Result};
pub use person::{Person, Sex};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
