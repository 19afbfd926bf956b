//! File writer for outputting generated schemas.
//!
//! Writes the rendered TypeScript to disk, creating parent directories on
//! demand. Dry-run mode returns the content instead of writing; an
//! unchanged file is skipped so watch mode does not churn timestamps.

use crate::error::{CliResult, WriteError};
use std::path::{Path, PathBuf};

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// File already held exactly this content; nothing was touched.
    Unchanged {
        /// Path to the existing file.
        path: PathBuf,
    },
    /// Dry run; content was not written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
}

/// File writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    /// Create a new file writer.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write content to a file.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        if let Ok(existing) = std::fs::read_to_string(path) {
            if existing == content {
                return Ok(WriteResult::Unchanged {
                    path: path.to_path_buf(),
                });
            }
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    /// Check if running in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl WriteResult {
    /// The path associated with this result.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } => path,
            WriteResult::Unchanged { path } => path,
            WriteResult::DryRun { path, .. } => path,
        }
    }

    /// Whether the file on disk changed.
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schemas.ts");
        let content = "export const TestSchema = z.string();\n";

        let writer = FileWriter::new(false);
        let result = writer.write(&path, content).unwrap();

        assert!(result.was_written());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/schemas.ts");

        let writer = FileWriter::new(false);
        let result = writer.write(&path, "x").unwrap();

        assert!(result.was_written());
        assert!(path.exists());
    }

    #[test]
    fn test_identical_content_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schemas.ts");
        let content = "export const TestSchema = z.string();\n";

        let writer = FileWriter::new(false);
        assert!(writer.write(&path, content).unwrap().was_written());

        let second = writer.write(&path, content).unwrap();
        assert!(matches!(second, WriteResult::Unchanged { .. }));
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schemas.ts");
        let content = "export const TestSchema = z.string();\n";

        let writer = FileWriter::new(true);
        let result = writer.write(&path, content).unwrap();

        assert!(matches!(result, WriteResult::DryRun { .. }));
        assert!(!path.exists());

        if let WriteResult::DryRun {
            content: dry_content,
            ..
        } = result
        {
            assert_eq!(dry_content, content);
        }
    }

    #[test]
    fn test_write_result_path() {
        let path = PathBuf::from("/test/schemas.ts");

        let written = WriteResult::Written {
            path: path.clone(),
            bytes: 10,
        };
        assert_eq!(written.path(), &path);

        let unchanged = WriteResult::Unchanged { path: path.clone() };
        assert_eq!(unchanged.path(), &path);
    }
}
