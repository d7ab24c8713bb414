//! Calendar arithmetic for age and projection dates
//!
//! All counts are whole calendar days or whole anniversaries between two
//! `NaiveDate`s. Nothing here divides a duration by a fixed day length, so
//! daylight saving and month-length irregularities cannot shift a count.
//!
//! Every year step goes through [`add_years`], so age counting and the
//! projected date roll a Feb 29 date in a non-leap year the same way.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{ProjectionError, Result};

/// Fixed-length year: converts fractional expectancy to days and days
/// lived to years lived
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Same month and day `years` later
///
/// A Feb 29 date landing in a non-leap year rolls forward to Mar 1.
pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate> {
    let overflow = || ProjectionError::DateOverflow(format!("{} + {} years", date, years));

    let year = i32::try_from(years)
        .ok()
        .and_then(|years| date.year().checked_add(years))
        .ok_or_else(overflow)?;

    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| {
            // Only Feb 29 can be missing from the target year
            (date.month() == 2 && date.day() == 29)
                .then(|| NaiveDate::from_ymd_opt(year, 3, 1))
                .flatten()
        })
        .ok_or_else(overflow)
}

pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| ProjectionError::DateOverflow(format!("{} + {} days", date, days)))
}

/// Whole days from `from` until `to`, 0 if `to` is not after `from`
///
/// Equal to stepping `from` forward one day at a time and counting the
/// steps until it is no longer before `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> u32 {
    to.signed_duration_since(from).num_days().max(0) as u32
}

/// Whole calendar days lived as of `now`
pub fn age_in_days(birth: NaiveDate, now: NaiveDate) -> u32 {
    days_between(birth, now)
}

/// Number of one-year steps from `birth` until the date is no longer before `now`
///
/// Each step advances the previous date, so a Feb 29 birth moves to Mar 1
/// after the first step and stays there. On the birthday itself this is the
/// completed age; on any other day it is the age reached at the next birthday.
pub fn age_in_years(birth: NaiveDate, now: NaiveDate) -> Result<u32> {
    let mut years = 0;
    let mut anniversary = birth;
    while anniversary < now {
        anniversary = add_years(anniversary, 1)?;
        years += 1;
    }
    Ok(years)
}

/// Projected date of death
///
/// Steps to the `age` anniversary, then adds the whole years of
/// `expectancy`, then its fractional part as days at 365 days a year
/// (truncated, not rounded).
pub fn projected_death_date(expectancy: f64, birth: NaiveDate, age: u32) -> Result<NaiveDate> {
    if !expectancy.is_finite() || expectancy < 0.0 {
        return Err(ProjectionError::InvalidTable(format!(
            "expectancy {} is not a non-negative number of years",
            expectancy
        )));
    }

    let whole_years = expectancy.trunc();
    let extra_days = (DAYS_PER_YEAR * (expectancy - whole_years)) as u64;

    let anniversary = add_years(birth, age)?;
    let date = add_years(anniversary, whole_years as u32)?;
    add_days(date, extra_days)
}

/// Whole days from `now` until the projected date, 0 once it has passed
pub fn days_remaining(projected_death: NaiveDate, now: NaiveDate) -> u32 {
    days_between(now, projected_death)
}
