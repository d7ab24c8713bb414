//! Lifespan projection: calendar arithmetic, engine and report output

pub mod calendar;
mod engine;
pub mod report;
mod result;

pub use engine::{ProjectionConfig, ProjectionEngine};
pub use report::{format_days, render_report, verbose_date};
pub use result::ProjectionResult;
