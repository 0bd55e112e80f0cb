//! Find log use case

use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use tracing::debug;

/// Service for locating past entries.
///
/// Searching is not implemented yet; the command is accepted and succeeds.
pub struct FindLogService {
    repository: FileSystemRepository,
}

impl FindLogService {
    pub fn new(repository: FileSystemRepository) -> Self {
        FindLogService { repository }
    }

    pub fn execute(&self) -> Result<()> {
        debug!(root = %self.repository.root().display(), "find requested");
        Ok(())
    }
}
