use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI jobs to tell a clean table apart from
/// one that still contains redundant dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - table processed (or already minimal in check mode)
    Success = 0,
    /// Check mode found dependencies that would be removed
    RedundantDependenciesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, parse error, rejected cycles, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RedundantDependenciesFound => write!(f, "Redundant Dependencies Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for skill table pruning.
#[derive(Debug, Error)]
pub enum PruneError {
    #[error("Skill table not found: {path}\n\n💡 Hint: {suggestion}")]
    TableNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse skill table: {path}\nDetails: {details}\n\n💡 Hint: The table needs a header row with the columns Skill, Category, Dependency 1, Dependency 2, Dependency 3, Dependency 4")]
    TableParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Dependency cycles detected ({count}):\n{cycles}\n\n💡 Hint: Remove one edge from each cycle, or run with --cycles warn to process the table anyway")]
    CyclicDependencies { count: usize, cycles: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
