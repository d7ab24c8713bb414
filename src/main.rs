//! Lifespan CLI
//!
//! Prints days lived, projected lifespan and days remaining for a birth date
//! and sex. Set LIFESPAN_TABLE_PATH to use a CSV expectancy table by default.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use lifespan::assumptions::loader::TABLE_PATH_ENV;
use lifespan::person::parse_birth_date;
use lifespan::projection::render_report;
use lifespan::{AgeRangePolicy, Assumptions, Person, ProjectionConfig, ProjectionEngine, Sex};

#[derive(Parser, Debug)]
#[command(name = "lifespan", version, about = "Project remaining lifespan from a birth date")]
struct Cli {
    /// Birth date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_birth_date)]
    birth: NaiveDate,

    /// Sex (one of 'f' or 'm')
    #[arg(long, value_name = "f|m", value_parser = Sex::from_str)]
    sex: Sex,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_birth_date)]
    as_of: Option<NaiveDate>,

    /// CSV expectancy table with columns age,female,male
    #[arg(long)]
    table: Option<PathBuf>,

    /// Use the oldest table age instead of failing for ages past the table
    #[arg(long)]
    clamp_age: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

/// Reject inputs clap cannot check on its own
fn validate(cli: &Cli, as_of: NaiveDate) -> std::result::Result<(), clap::Error> {
    if cli.birth > as_of {
        return Err(Cli::command().error(
            ErrorKind::ValueValidation,
            format!("birth date {} is after {}", cli.birth, as_of),
        ));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match cli.as_of {
        Some(as_of) => ProjectionConfig::as_of(as_of),
        None => ProjectionConfig::today(),
    };

    if let Err(err) = validate(&cli, config.as_of) {
        err.exit();
    }

    let table_path = cli
        .table
        .or_else(|| env::var_os(TABLE_PATH_ENV).map(PathBuf::from));
    let assumptions = match &table_path {
        Some(path) => Assumptions::from_csv_path(path)
            .with_context(|| format!("Failed to load expectancy table {}", path.display()))?,
        None => Assumptions::medicaid(),
    };
    let age_range = if cli.clamp_age {
        AgeRangePolicy::Clamp
    } else {
        AgeRangePolicy::Reject
    };

    let engine = ProjectionEngine::new(assumptions.with_age_range(age_range), config);
    let person = Person::new(cli.birth, cli.sex);
    let result = engine
        .project(&person)
        .with_context(|| format!("Failed to project lifespan for birth date {}", cli.birth))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_report(&result));
    }

    Ok(())
}
