//! External process execution

use crate::error::{Result, WalError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// A single external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Inherit the terminal instead of capturing output (used for editors)
    pub interactive: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Invocation {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            interactive: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Render as a shell-like command line for messages
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Most useful diagnostic text: stderr if present, otherwise stdout
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

/// Runs external programs and blocks until they exit
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        debug!(command = %invocation.display(), cwd = ?invocation.cwd, "running");

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }

        let launch_error = |e: std::io::Error| {
            WalError::ExternalCommand(format!(
                "Failed to launch '{}': {}",
                invocation.program, e
            ))
        };

        if invocation.interactive {
            let status = cmd
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(launch_error)?;

            return Ok(CommandOutput {
                code: status.code(),
                success: status.success(),
                ..CommandOutput::default()
            });
        }

        let output = cmd.stdin(Stdio::null()).output().map_err(launch_error)?;

        Ok(CommandOutput {
            code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_builder() {
        let inv = Invocation::new("git")
            .arg("commit")
            .args(["-m", "hello world"])
            .current_dir(Path::new("/tmp/logs"));

        assert_eq!(inv.program, "git");
        assert_eq!(inv.args, vec!["commit", "-m", "hello world"]);
        assert_eq!(inv.cwd, Some(PathBuf::from("/tmp/logs")));
        assert!(!inv.interactive);
        assert_eq!(inv.display(), "git commit -m hello world");
    }

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let output = CommandOutput {
            code: Some(1),
            success: false,
            stdout: "nothing to commit\n".to_string(),
            stderr: "  fatal: no remote  \n".to_string(),
        };
        assert_eq!(output.diagnostic(), "fatal: no remote");

        let output = CommandOutput {
            stdout: "nothing to commit\n".to_string(),
            ..CommandOutput::default()
        };
        assert_eq!(output.diagnostic(), "nothing to commit");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_output() {
        let temp = tempfile::TempDir::new().unwrap();
        let inv = Invocation::new("sh")
            .args(["-c", "pwd; echo oops >&2; exit 3"])
            .current_dir(temp.path());

        let output = SystemRunner.run(&inv).unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stderr.trim(), "oops");
        let pwd = std::fs::canonicalize(temp.path()).unwrap();
        assert_eq!(
            std::fs::canonicalize(output.stdout.trim()).unwrap(),
            pwd
        );
    }

    #[test]
    fn test_system_runner_missing_program() {
        let inv = Invocation::new("wal-definitely-not-a-real-program");
        match SystemRunner.run(&inv) {
            Err(WalError::ExternalCommand(msg)) => {
                assert!(msg.contains("wal-definitely-not-a-real-program"))
            }
            other => panic!("expected launch failure, got {:?}", other),
        }
    }
}
