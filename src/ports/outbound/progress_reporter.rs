/// ProgressReporter port for status output during a run
///
/// All user-facing status goes through this port so stdout stays reserved
/// for table output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the rows
    ///
    /// # Arguments
    /// * `current` - Rows processed so far
    /// * `total` - Total number of rows
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
