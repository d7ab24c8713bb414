//! Text report for a projection result

use chrono::NaiveDate;

use super::result::ProjectionResult;
use crate::person::ISO_DATE_FORMAT;

/// Long date format, e.g. "Saturday, January 1 of 2000"
pub const VERBOSE_DATE_FORMAT: &str = "%A, %B %-d of %Y";

/// Day count with a single comma placed by magnitude
///
/// 1,000-9,999 get a comma after the first digit and anything from 10,000
/// up gets one after the first two digits. No further grouping is applied.
pub fn format_days(days: u32) -> String {
    let digits = days.to_string();
    let split = match days {
        10_000.. => 2,
        1_000.. => 1,
        _ => return digits,
    };
    format!("{},{}", &digits[..split], &digits[split..])
}

pub fn verbose_date(date: NaiveDate) -> String {
    date.format(VERBOSE_DATE_FORMAT).to_string()
}

fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Render the full report: summary sentence followed by the event table
pub fn render_report(result: &ProjectionResult) -> String {
    let mut out = format!(
        "Given that you have lived {} days, a lifespan of {:.2} years since your birth on {}, ",
        format_days(result.age_in_days),
        result.years_lived,
        verbose_date(result.birth_date),
    );
    out.push_str(&format!(
        "and based on {} average life expectancy for {}s, you have {} days remaining \
         until reaching your projected lifespan of {:.2} years on {}.\n\n",
        result.table_source,
        result.sex.label(),
        format_days(result.projected_days_remaining),
        result.projected_lifespan_years,
        verbose_date(result.projected_death_date),
    ));

    out.push_str("Event  Date         Age\n");
    out.push_str(&format!("{}\n", "-".repeat(42)));
    out.push_str(&format!(
        "Birth: {}  0.00 ({} days ago)\n",
        iso_date(result.birth_date),
        format_days(result.age_in_days),
    ));
    out.push_str(&format!(
        "Today: {} {:<5.2}\n",
        iso_date(result.as_of),
        result.years_lived,
    ));
    out.push_str(&format!(
        "Death: {} {:<5.2} ({} days left)\n",
        iso_date(result.projected_death_date),
        result.projected_lifespan_years,
        format_days(result.projected_days_remaining),
    ));

    out
}
