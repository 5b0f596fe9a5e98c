use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held the same content
    Unchanged,
}

/// A generated file to be written to disk
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Existing files with identical content are left untouched so that
    /// file watchers are not triggered by a no-op regeneration.
    pub fn write(&self) -> Result<WriteResult> {
        if let Ok(existing) = std::fs::read_to_string(&self.path)
            && existing == self.content
        {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}
