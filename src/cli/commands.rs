//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wal")]
#[command(about = "Your personal write-ahead log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ~/.config/wal/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open or create the log for a date
    Open {
        /// Date as DD, MMDD or YYYYMMDD
        #[arg(value_name = "[YYYY[MM]]DD", allow_negative_numbers = true)]
        date: String,
    },

    /// Commit and push the log directory
    Sync {
        /// Custom commit message
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Find logs
    Find,
}
