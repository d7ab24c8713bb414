//! CSV-based expectancy table loader
//!
//! Tables are stored as `age,female,male` with one row per attained age,
//! starting at age 0 with no gaps.

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LifeExpectancyTable;
use crate::error::{ProjectionError, Result};

/// Environment variable consulted when no table path is given on the command line
pub const TABLE_PATH_ENV: &str = "LIFESPAN_TABLE_PATH";

/// Label the report uses for a table loaded from disk
pub const LOADED_SOURCE: &str = "the supplied table's";

/// Raw CSV row
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    age: u32,
    female: f64,
    male: f64,
}

/// Load a table from a CSV file
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<LifeExpectancyTable> {
    let path = path.as_ref();
    log::info!("Loading expectancy table from {}", path.display());

    let reader = csv::Reader::from_path(path)?;
    read_rows(reader)
}

/// Load a table from any CSV reader
pub fn load_table_from_reader<R: Read>(reader: R) -> Result<LifeExpectancyTable> {
    read_rows(csv::Reader::from_reader(reader))
}

fn read_rows<R: Read>(mut reader: csv::Reader<R>) -> Result<LifeExpectancyTable> {
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;

        if row.age as usize != rows.len() {
            return Err(ProjectionError::InvalidTable(format!(
                "expected age {} but found age {}",
                rows.len(),
                row.age
            )));
        }
        rows.push((row.female, row.male));
    }

    log::debug!("Read {} table rows", rows.len());
    LifeExpectancyTable::new(rows, LOADED_SOURCE)
}

/// Write a table as `age,female,male` CSV
pub fn write_table<W: Write>(table: &LifeExpectancyTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    for (age, female, male) in table.rows() {
        writer.serialize(CsvRow { age, female, male })?;
    }

    writer
        .flush()
        .map_err(|e| ProjectionError::TableCsv(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Sex;

    #[test]
    fn test_load_from_reader() {
        let data = "age,female,male\n0,80.5,75.25\n1,79.5,74.5\n2,78.0,73.0\n";
        let table = load_table_from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.max_age(), 2);
        assert_eq!(table.expectancy(0, Sex::Male), Some(75.25));
        assert_eq!(table.expectancy(2, Sex::Female), Some(78.0));
        assert_eq!(table.source(), LOADED_SOURCE);
    }

    #[test]
    fn test_rejects_gaps() {
        let data = "age,female,male\n0,80.0,75.0\n2,78.0,73.0\n";
        let err = load_table_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidTable(_)));
    }

    #[test]
    fn test_rejects_table_not_starting_at_zero() {
        let data = "age,female,male\n1,80.0,75.0\n";
        assert!(load_table_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_malformed_values() {
        let data = "age,female,male\n0,eighty,75.0\n";
        let err = load_table_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::TableCsv(_)));
    }

    #[test]
    fn test_written_table_loads_back() {
        let builtin = LifeExpectancyTable::medicaid();
        let mut file = tempfile::NamedTempFile::new().unwrap();

        let mut buf = Vec::new();
        write_table(&builtin, &mut buf).unwrap();
        file.write_all(&buf).unwrap();
        file.flush().unwrap();

        let loaded = load_table(file.path()).unwrap();
        assert_eq!(loaded.max_age(), builtin.max_age());
        for (age, female, male) in builtin.rows() {
            assert_eq!(loaded.expectancy(age, Sex::Female), Some(female));
            assert_eq!(loaded.expectancy(age, Sex::Male), Some(male));
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_table("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::TableCsv(_)));
    }
}
