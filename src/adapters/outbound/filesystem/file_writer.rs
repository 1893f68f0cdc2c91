use crate::ports::outbound::OutputPresenter;
use crate::shared::error::PruneError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for writing the table back to disk
///
/// Content goes to a temporary file next to the target which then replaces
/// it, so the table is either fully rewritten or left untouched.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: String) -> PruneError {
        PruneError::FileWriteError {
            path: self.output_path.clone(),
            details,
        }
    }

    fn target_directory(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    fn validate_target(&self) -> Result<()> {
        let directory = self.target_directory();
        if !directory.is_dir() {
            return Err(self
                .write_error(format!(
                    "Parent directory does not exist: {}",
                    directory.display()
                ))
                .into());
        }

        validate_not_symlink(&self.output_path, "Write")
            .map_err(|e| self.write_error(e.to_string()))?;

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_target()?;

        let mut staged = NamedTempFile::new_in(self.target_directory())
            .map_err(|e| self.write_error(format!("Failed to create temporary file: {}", e)))?;
        // Keep the permissions of the table being replaced
        if let Ok(existing) = fs::metadata(&self.output_path) {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| self.write_error(e.to_string()))?;
        }
        staged
            .write_all(content.as_bytes())
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| self.write_error(e.to_string()))?;
        staged
            .persist(&self.output_path)
            .map_err(|e| self.write_error(e.error.to_string()))?;

        eprintln!("✅ Saved: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for printing the table instead of saving it
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("skills.csv");

        let writer = FileSystemWriter::new(output_path.clone());
        let result = writer.present("Skill\nGrip\n");

        assert!(result.is_ok());
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "Skill\nGrip\n");
    }

    #[test]
    fn test_file_writer_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("skills.csv");
        fs::write(&output_path, "old content that is longer than the new one").unwrap();

        FileSystemWriter::new(output_path.clone())
            .present("new")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
        // No staging files left behind
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/skills.csv");

        let result = FileSystemWriter::new(output_path).present("content");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.csv");
        let link = temp_dir.path().join("link.csv");
        fs::write(&real, "original").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let result = FileSystemWriter::new(link).present("replaced");

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&real).unwrap(), "original");
    }

    #[test]
    fn test_target_directory_for_bare_file_name() {
        let writer = FileSystemWriter::new(PathBuf::from("skills.csv"));
        assert_eq!(writer.target_directory(), Path::new("."));
    }

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        assert!(presenter.present("Skill\n").is_ok());
    }
}
