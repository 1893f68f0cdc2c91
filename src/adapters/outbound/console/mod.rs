/// Console adapters for status output
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
