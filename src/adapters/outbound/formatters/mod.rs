/// Formatter adapters for rendering the cleaned table
mod csv_formatter;

pub use csv_formatter::{CsvTableFormatter, SKILL_TABLE_COLUMNS};
