//! Write the built-in life expectancy table to CSV
//!
//! The output can be edited and passed back to `lifespan --table`.
//! Usage: export_table [OUTPUT_PATH]

use std::env;
use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use lifespan::assumptions::{write_table, LifeExpectancyTable};

const DEFAULT_OUTPUT_PATH: &str = "life_expectancy_table.csv";

fn main() -> Result<()> {
    env_logger::init();

    let output_path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let table = LifeExpectancyTable::medicaid();
    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    write_table(&table, BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", output_path))?;

    println!(
        "Written {} ages (0-{}) to {}",
        table.max_age() + 1,
        table.max_age(),
        output_path
    );
    Ok(())
}
