//! wal - your personal write-ahead log
//!
//! Opens one markdown file per day in your editor and keeps the log
//! directory synced with a git remote.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WalError;
