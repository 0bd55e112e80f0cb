//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod git;
pub mod repository;
pub mod runner;

pub use config::Config;
pub use editor::EditorSession;
pub use git::GitWorkTree;
pub use repository::FileSystemRepository;
pub use runner::{CommandOutput, CommandRunner, Invocation, SystemRunner};
