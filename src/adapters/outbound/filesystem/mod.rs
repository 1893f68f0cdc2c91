/// Filesystem adapters for reading and writing the skill table
mod csv_table_reader;
mod file_writer;

pub use csv_table_reader::CsvFileReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
