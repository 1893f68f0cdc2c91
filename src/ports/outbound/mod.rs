/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod output_presenter;
pub mod progress_reporter;
pub mod skill_table_reader;
pub mod table_formatter;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use skill_table_reader::SkillTableReader;
pub use table_formatter::TableFormatter;
