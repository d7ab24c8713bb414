//! Core projection engine: age, expectancy lookup and projected date

use chrono::{Local, NaiveDate};

use super::calendar;
use super::result::ProjectionResult;
use crate::assumptions::Assumptions;
use crate::error::{ProjectionError, Result};
use crate::person::Person;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Date treated as "now" for every calculation in the run
    pub as_of: NaiveDate,
}

impl ProjectionConfig {
    pub fn as_of(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// Read the host's local calendar date once
    pub fn today() -> Self {
        Self::as_of(Local::now().date_naive())
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::today()
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    /// Run the projection for a single person
    pub fn project(&self, person: &Person) -> Result<ProjectionResult> {
        let now = self.config.as_of;
        let birth = person.birth_date;

        if birth > now {
            return Err(ProjectionError::BirthAfterAsOf { birth, as_of: now });
        }

        let age_in_days = calendar::age_in_days(birth, now);
        let age_in_years = calendar::age_in_years(birth, now)?;
        log::debug!(
            "Age as of {}: {} days, {} years",
            now,
            age_in_days,
            age_in_years
        );

        let remaining = self.assumptions.remaining_years(age_in_years, person.sex)?;
        let projected_death_date = calendar::projected_death_date(remaining, birth, age_in_years)?;
        let projected_days_remaining = calendar::days_remaining(projected_death_date, now);
        log::debug!(
            "Expectancy {:.2} years at age {} ({}), projected date {}",
            remaining,
            age_in_years,
            person.sex,
            projected_death_date
        );

        Ok(ProjectionResult {
            as_of: now,
            birth_date: birth,
            sex: person.sex,
            age_in_days,
            age_in_years,
            years_lived: age_in_days as f64 / calendar::DAYS_PER_YEAR,
            remaining_expectancy_years: remaining,
            projected_lifespan_years: age_in_years as f64 + remaining,
            projected_death_date,
            projected_days_remaining,
            table_source: self.assumptions.expectancy.source().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{AgeRangePolicy, LifeExpectancyTable};
    use crate::person::Sex;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine_as_of(as_of: NaiveDate) -> ProjectionEngine {
        ProjectionEngine::new(Assumptions::medicaid(), ProjectionConfig::as_of(as_of))
    }

    #[test]
    fn test_reference_male_projection() {
        let engine = engine_as_of(date(2024, 1, 1));
        let person = Person::new(date(2000, 1, 1), Sex::Male);

        let result = engine.project(&person).unwrap();

        assert_eq!(result.age_in_days, 8766);
        assert_eq!(result.age_in_years, 24);
        assert_relative_eq!(result.remaining_expectancy_years, 51.50);
        assert_relative_eq!(result.projected_lifespan_years, 75.50);
        assert_eq!(result.projected_death_date, date(2075, 7, 2));
        assert_eq!(result.projected_days_remaining, 18_810);
        assert_relative_eq!(result.years_lived, 8766.0 / 365.0);
        assert_eq!(result.table_source, "medicaid's");
        assert!(result.projected_death_date > result.as_of);
    }

    #[test]
    fn test_female_uses_female_column() {
        let engine = engine_as_of(date(2024, 1, 1));
        let person = Person::new(date(2000, 1, 1), Sex::Female);

        let result = engine.project(&person).unwrap();

        // Female expectancy at 24 is 56.36
        assert_relative_eq!(result.remaining_expectancy_years, 56.36);
        assert_eq!(result.projected_death_date, date(2080, 5, 11));
    }

    #[test]
    fn test_newborn() {
        let engine = engine_as_of(date(2024, 6, 1));
        let person = Person::new(date(2024, 6, 1), Sex::Male);

        let result = engine.project(&person).unwrap();

        assert_eq!(result.age_in_days, 0);
        assert_eq!(result.age_in_years, 0);
        assert_relative_eq!(result.remaining_expectancy_years, 74.14);
        assert!(result.projected_death_date > result.as_of);
    }

    #[test]
    fn test_leap_day_birth_steps_through_mar_1() {
        let engine = engine_as_of(date(2004, 3, 1));
        let person = Person::new(date(2000, 2, 29), Sex::Male);

        let result = engine.project(&person).unwrap();

        assert_eq!(result.age_in_years, 4);
        assert_relative_eq!(result.remaining_expectancy_years, 70.79);
    }

    #[test]
    fn test_birth_after_as_of_rejected() {
        let engine = engine_as_of(date(2024, 1, 1));
        let person = Person::new(date(2024, 1, 2), Sex::Female);

        let err = engine.project(&person).unwrap_err();
        assert!(matches!(err, ProjectionError::BirthAfterAsOf { .. }));
    }

    #[test]
    fn test_age_past_table() {
        let person = Person::new(date(1890, 1, 1), Sex::Male);

        let err = engine_as_of(date(2024, 1, 1)).project(&person).unwrap_err();
        assert!(matches!(err, ProjectionError::AgeOutOfRange { age: 134, .. }));

        let clamped = ProjectionEngine::new(
            Assumptions::medicaid().with_age_range(AgeRangePolicy::Clamp),
            ProjectionConfig::as_of(date(2024, 1, 1)),
        );
        let result = clamped.project(&person).unwrap();
        assert_relative_eq!(result.remaining_expectancy_years, 0.56);
        assert_eq!(result.age_in_years, 134);
    }

    #[test]
    fn test_custom_table() {
        let table = LifeExpectancyTable::new(vec![(2.0, 1.0); 50], "custom").unwrap();
        let assumptions = Assumptions {
            expectancy: table,
            age_range: AgeRangePolicy::Reject,
        };
        let engine = ProjectionEngine::new(assumptions, ProjectionConfig::as_of(date(2020, 3, 1)));

        let result = engine.project(&Person::new(date(2000, 3, 1), Sex::Male)).unwrap();
        assert_eq!(result.projected_death_date, date(2021, 3, 1));
        assert_eq!(result.projected_days_remaining, 365);
        assert_eq!(result.table_source, "custom");
    }
}
