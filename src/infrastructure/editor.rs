//! Editor integration for opening log files

use crate::error::{Result, WalError};
use crate::infrastructure::runner::{CommandRunner, Invocation};
use std::path::Path;
use tracing::warn;

/// Session for opening files in an external editor
pub struct EditorSession<'a, R: CommandRunner> {
    command: String,
    runner: &'a R,
}

impl<'a, R: CommandRunner> EditorSession<'a, R> {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String, runner: &'a R) -> Self {
        EditorSession {
            command: editor_command,
            runner,
        }
    }

    /// Open a file in the editor and wait until the editor exits
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command().ok_or_else(|| {
            WalError::Config("EDITOR in section [DEFAULT] must not be empty".to_string())
        })?;

        let invocation = Invocation::new(program)
            .args(args)
            .arg(file_path.to_string_lossy())
            .interactive();

        let output = self.runner.run(&invocation)?;
        if !output.success {
            warn!(
                editor = %invocation.program,
                code = ?output.code,
                "editor exited with a non-zero status"
            );
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> Option<(String, Vec<String>)> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next()?.to_string();
        let args = parts.map(|s| s.to_string()).collect();

        Some((program, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::runner::fake::FakeRunner;

    fn parse(command: &str) -> Option<(String, Vec<String>)> {
        let runner = FakeRunner::new();
        EditorSession::new(command.to_string(), &runner).parse_command()
    }

    #[test]
    fn test_parse_command_simple() {
        let (program, args) = parse("vim").unwrap();

        assert_eq!(program, "vim");
        assert_eq!(args.len(), 0);
    }

    #[test]
    fn test_parse_command_with_args() {
        let (program, args) = parse("code -w").unwrap();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);
    }

    #[test]
    fn test_parse_command_with_spaces() {
        let (program, args) = parse("  vim  -n  ").unwrap();

        assert_eq!(program, "vim");
        assert_eq!(args, vec!["-n"]);
    }

    #[test]
    fn test_parse_command_empty() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
    }

    #[test]
    fn test_open_passes_file_as_last_argument() {
        let runner = FakeRunner::new();
        let session = EditorSession::new("code -w".to_string(), &runner);

        session.open(Path::new("/logs/20230410.md")).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "code");
        assert_eq!(calls[0].args, vec!["-w", "/logs/20230410.md"]);
        assert!(calls[0].interactive);
    }

    #[test]
    fn test_open_ignores_editor_exit_status() {
        let runner = FakeRunner::new().failing_on("nvim");
        let session = EditorSession::new("nvim".to_string(), &runner);

        assert!(session.open(Path::new("/logs/20230410.md")).is_ok());
    }

    #[test]
    fn test_open_reports_launch_failure() {
        let runner = FakeRunner::new().missing_program("nvim");
        let session = EditorSession::new("nvim".to_string(), &runner);

        let result = session.open(Path::new("/logs/20230410.md"));
        assert!(matches!(result, Err(WalError::ExternalCommand(_))));
    }

    #[test]
    fn test_open_empty_command() {
        let runner = FakeRunner::new();
        let session = EditorSession::new(String::new(), &runner);

        let result = session.open(Path::new("/logs/20230410.md"));
        assert!(matches!(result, Err(WalError::Config(_))));
        assert!(runner.calls.borrow().is_empty());
    }
}
