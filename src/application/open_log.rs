//! Open log use case

use crate::domain::DateToken;
use crate::error::Result;
use crate::infrastructure::{CommandRunner, EditorSession, FileSystemRepository};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Service for opening the log of a given day in the editor
pub struct OpenLogService<'a, R: CommandRunner> {
    repository: FileSystemRepository,
    editor: String,
    runner: &'a R,
}

impl<'a, R: CommandRunner> OpenLogService<'a, R> {
    /// Create a new open log service
    pub fn new(repository: FileSystemRepository, editor: String, runner: &'a R) -> Self {
        OpenLogService {
            repository,
            editor,
            runner,
        }
    }

    /// Expand the token, create the log file if needed and edit it.
    /// Returns the path of the log file.
    pub fn execute(&self, token: DateToken, today: NaiveDate) -> Result<PathBuf> {
        let date = token.expand(today)?;
        let path = self.repository.ensure_entry(date)?;

        EditorSession::new(self.editor.clone(), self.runner).open(&path)?;

        Ok(path)
    }
}
