//! File system repository for the log directory

use crate::domain::ExpandedDate;
use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// The log directory: one markdown file per day plus git metadata after the first sync
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the log file for a date (whether or not it exists)
    pub fn entry_path(&self, date: ExpandedDate) -> PathBuf {
        self.root.join(date.file_name())
    }

    /// Create the log directory tree if it is missing
    pub fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    /// Make sure the log file for a date exists without touching existing content
    pub fn ensure_entry(&self, date: ExpandedDate) -> Result<PathBuf> {
        self.ensure_root()?;

        let path = self.entry_path(date);
        OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(path)
    }

    /// Whether the directory already is a git working tree
    pub fn is_git_repository(&self) -> bool {
        self.root.join(".git").exists()
    }
}
