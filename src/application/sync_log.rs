//! Sync log use case
//!
//! Sync is best effort: every git step is attempted even when an earlier one
//! fails, and failures are collected in the returned [`SyncReport`].

use crate::error::Result;
use crate::infrastructure::{
    CommandOutput, CommandRunner, Config, FileSystemRepository, GitWorkTree,
};
use chrono::{DateTime, Local};
use tracing::debug;

/// Outcome of one git step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncStep {
    pub name: &'static str,
    pub success: bool,
    pub detail: String,
}

/// Everything that happened during one sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// True when this run created the repository
    pub initialized: bool,
    pub message: String,
    pub steps: Vec<SyncStep>,
}

impl SyncReport {
    pub fn failures(&self) -> impl Iterator<Item = &SyncStep> {
        self.steps.iter().filter(|step| !step.success)
    }
}

/// Service for committing and pushing the log directory
pub struct SyncLogService<'a, R: CommandRunner> {
    repository: FileSystemRepository,
    config: Config,
    runner: &'a R,
}

impl<'a, R: CommandRunner> SyncLogService<'a, R> {
    /// Create a new sync service
    pub fn new(repository: FileSystemRepository, config: Config, runner: &'a R) -> Self {
        SyncLogService {
            repository,
            config,
            runner,
        }
    }

    /// Default commit message: `<prefix> <YYYYMMDDHHMMSS>`
    pub fn default_message(&self, now: DateTime<Local>) -> String {
        let stamp = now.format("%Y%m%d%H%M%S").to_string();
        let prefix = self.config.sync.commit_message_prefix.trim();
        if prefix.is_empty() {
            stamp
        } else {
            format!("{} {}", prefix, stamp)
        }
    }

    /// Initialize the repository if needed, then stage, commit and push
    pub fn execute(&self, message: Option<&str>, now: DateTime<Local>) -> Result<SyncReport> {
        let initialized = !self.repository.is_git_repository();
        if initialized {
            self.config.require_sync_identity()?;
        }
        self.repository.ensure_root()?;

        let git = GitWorkTree::new(self.repository.root(), self.runner);
        let sync = &self.config.sync;
        let message = match message {
            Some(m) => m.to_string(),
            None => self.default_message(now),
        };

        let mut steps = Vec::new();
        if initialized {
            steps.push(step("init", git.init()));
            steps.push(step("remote", git.add_remote(&sync.remote_url)));
            steps.push(step("user.name", git.set_config("user.name", &sync.user_name)));
            steps.push(step("user.email", git.set_config("user.email", &sync.user_email)));
        }
        steps.push(step("add", git.stage_all()));
        steps.push(step("commit", git.commit(&message)));
        let branch = git.remote_default_branch();
        steps.push(step("push", git.push(branch.as_deref())));

        Ok(SyncReport {
            initialized,
            message,
            steps,
        })
    }
}

fn step(name: &'static str, result: Result<CommandOutput>) -> SyncStep {
    let (success, detail) = match result {
        Ok(output) => (output.success, output.diagnostic()),
        Err(e) => (false, e.to_string()),
    };

    if !success {
        debug!(step = name, detail = %detail, "sync step failed");
    }

    SyncStep {
        name,
        success,
        detail,
    }
}
