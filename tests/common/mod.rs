#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn wal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wal").unwrap();
    cmd.env_remove("WAL_LOG");
    cmd
}

/// Write a complete config file under `dir` and return its path
pub fn write_config(dir: &Path, log_dir: &Path, editor: &str, remote: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let content = format!(
        "[DEFAULT]\n\
         LOG_DIR = {:?}\n\
         EDITOR = {:?}\n\
         \n\
         [SYNC]\n\
         GIT_REMOTE_URL = {:?}\n\
         GIT_USER_NAME = \"Test Writer\"\n\
         GIT_USER_EMAIL = \"writer@example.com\"\n\
         GIT_COMMIT_MESSAGE_PREFIX = \"wal sync\"\n",
        log_dir.to_string_lossy(),
        editor,
        remote
    );
    fs::write(&path, content).unwrap();
    path
}
