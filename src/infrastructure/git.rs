//! Git working tree operations for the log directory

use crate::error::Result;
use crate::infrastructure::runner::{CommandOutput, CommandRunner, Invocation};
use std::path::{Path, PathBuf};

const REMOTE_NAME: &str = "origin";

/// A git working tree driven through the `git` executable
pub struct GitWorkTree<'a, R: CommandRunner> {
    root: PathBuf,
    runner: &'a R,
}

impl<'a, R: CommandRunner> GitWorkTree<'a, R> {
    pub fn new(root: &Path, runner: &'a R) -> Self {
        GitWorkTree {
            root: root.to_path_buf(),
            runner,
        }
    }

    pub fn init(&self) -> Result<CommandOutput> {
        self.git(["init"])
    }

    pub fn add_remote(&self, url: &str) -> Result<CommandOutput> {
        self.git(["remote", "add", REMOTE_NAME, url])
    }

    pub fn set_config(&self, key: &str, value: &str) -> Result<CommandOutput> {
        self.git(["config", key, value])
    }

    pub fn stage_all(&self) -> Result<CommandOutput> {
        self.git(["add", "--all"])
    }

    pub fn commit(&self, message: &str) -> Result<CommandOutput> {
        self.git(["commit", "-m", message])
    }

    /// Branch the remote's HEAD points at, if the remote has one yet
    pub fn remote_default_branch(&self) -> Option<String> {
        let output = self.git(["ls-remote", "--symref", REMOTE_NAME, "HEAD"]).ok()?;
        if !output.success {
            return None;
        }
        parse_symref_head(&output.stdout)
    }

    /// Push the current branch to `branch` on the remote, or to the branch of
    /// the same name when the remote has no default branch yet
    pub fn push(&self, branch: Option<&str>) -> Result<CommandOutput> {
        match branch {
            Some(branch) => {
                let refspec = format!("HEAD:refs/heads/{}", branch);
                self.git(["push", "-u", REMOTE_NAME, refspec.as_str()])
            }
            None => self.git(["push", "-u", REMOTE_NAME, "HEAD"]),
        }
    }

    fn git<const N: usize>(&self, args: [&str; N]) -> Result<CommandOutput> {
        let invocation = Invocation::new("git").args(args).current_dir(&self.root);
        self.runner.run(&invocation)
    }
}

// `ls-remote --symref` prints `ref: refs/heads/<branch>\tHEAD` for the default branch
fn parse_symref_head(stdout: &str) -> Option<String> {
    stdout.lines().find_map(|line| {
        let (target, name) = line.strip_prefix("ref: ")?.split_once('\t')?;
        if name.trim() != "HEAD" {
            return None;
        }
        target.strip_prefix("refs/heads/").map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::runner::fake::FakeRunner;

    #[test]
    fn test_commands_run_in_log_directory() {
        let runner = FakeRunner::new();
        let git = GitWorkTree::new(Path::new("/logs"), &runner);

        git.init().unwrap();
        git.add_remote("git@example.com:me/logs.git").unwrap();
        git.set_config("user.name", "Someone").unwrap();
        git.stage_all().unwrap();
        git.commit("wal sync 20240315120000").unwrap();
        git.push(None).unwrap();
        git.push(Some("main")).unwrap();

        assert_eq!(
            runner.command_lines(),
            vec![
                "git init",
                "git remote add origin git@example.com:me/logs.git",
                "git config user.name Someone",
                "git add --all",
                "git commit -m wal sync 20240315120000",
                "git push -u origin HEAD",
                "git push -u origin HEAD:refs/heads/main",
            ]
        );
        for call in runner.calls.borrow().iter() {
            assert_eq!(call.cwd.as_deref(), Some(Path::new("/logs")));
            assert!(!call.interactive);
        }
    }

    #[test]
    fn test_commit_message_is_single_argument() {
        let runner = FakeRunner::new();
        let git = GitWorkTree::new(Path::new("/logs"), &runner);

        git.commit("a message with spaces").unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls[0].args, vec!["commit", "-m", "a message with spaces"]);
    }

    #[test]
    fn test_parse_symref_head() {
        let stdout = "ref: refs/heads/main\tHEAD\n3f2a9c1e0b\tHEAD\n";
        assert_eq!(parse_symref_head(stdout), Some("main".to_string()));
        assert_eq!(parse_symref_head(""), None);
        assert_eq!(parse_symref_head("3f2a9c1e0b\tHEAD\n"), None);
    }

    #[test]
    fn test_remote_default_branch() {
        let runner = FakeRunner::new()
            .with_stdout("git ls-remote", "ref: refs/heads/trunk\tHEAD\nabc123\tHEAD\n");
        let git = GitWorkTree::new(Path::new("/logs"), &runner);
        assert_eq!(git.remote_default_branch(), Some("trunk".to_string()));
        assert_eq!(
            runner.command_lines(),
            vec!["git ls-remote --symref origin HEAD"]
        );

        let unreachable = FakeRunner::new().failing_on("git ls-remote");
        let git = GitWorkTree::new(Path::new("/logs"), &unreachable);
        assert_eq!(git.remote_default_branch(), None);
    }
}
