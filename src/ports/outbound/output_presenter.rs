use crate::shared::Result;

/// OutputPresenter port for presenting the rendered table
///
/// This port abstracts the output destination (table file, stdout).
pub trait OutputPresenter {
    /// Presents the rendered table content
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link or its directory is missing
    fn present(&self, content: &str) -> Result<()>;
}
