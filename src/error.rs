//! Error types for wal

use thiserror::Error;

/// Main error type for wal application
#[derive(Debug, Error)]
pub enum WalError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Configuration error: missing section [{0}]")]
    MissingConfigSection(String),

    #[error("Configuration error: missing key {key} in section [{section}]")]
    MissingConfigKey { section: String, key: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External command error: {0}")]
    ExternalCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WalError::MissingConfigSection(_)
            | WalError::MissingConfigKey { .. }
            | WalError::Config(_)
            | WalError::TomlDeserialize(_) => 2,
            WalError::InvalidDateFormat(_) => 3,
            WalError::ExternalCommand(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WalError::InvalidDateFormat(detail) => {
                format!(
                    "Invalid date format: {}\n\n\
                    Expected one of:\n\
                    • DD        day of the current month (e.g., 7 or 17)\n\
                    • MMDD      day of the current year (e.g., 312 or 1201)\n\
                    • YYYYMMDD  full date (e.g., 20230410)\n\n\
                    Examples:\n\
                    wal open 17\n\
                    wal open 1201\n\
                    wal open 20230410",
                    detail
                )
            }
            WalError::MissingConfigSection(section) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Add a [{}] section to your config file\n\
                    • Delete the config file to regenerate it with defaults\n\
                    • Point at another file with: wal --config <path>",
                    self, section
                )
            }
            WalError::MissingConfigKey { section, key } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Set {} = \"...\" under [{}] in your config file\n\
                    • Point at another file with: wal --config <path>",
                    self, key, section
                )
            }
            WalError::ExternalCommand(msg) => {
                format!(
                    "External command error: {}\n\n\
                    Suggestions:\n\
                    • Check that the program is installed and in PATH\n\
                    • Check EDITOR under [DEFAULT] in your config file",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WalError
pub type Result<T> = std::result::Result<T, WalError>;
