//! Person data: birth date and sex as given on the command line

mod data;

pub use data::{parse_birth_date, Person, Sex, ISO_DATE_FORMAT};
