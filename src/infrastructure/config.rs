//! Configuration management

use crate::error::{Result, WalError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SECTION: &str = "DEFAULT";
pub const SYNC_SECTION: &str = "SYNC";

/// `[DEFAULT]` section: where logs live and how to edit them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneralConfig {
    /// Log directory, stored unexpanded (may contain `~` or `$VAR`)
    #[serde(rename = "LOG_DIR")]
    pub log_dir: String,
    #[serde(rename = "EDITOR")]
    pub editor: String,
}

/// `[SYNC]` section: git remote and commit identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncConfig {
    #[serde(rename = "GIT_REMOTE_URL")]
    pub remote_url: String,
    #[serde(rename = "GIT_USER_NAME")]
    pub user_name: String,
    #[serde(rename = "GIT_USER_EMAIL")]
    pub user_email: String,
    #[serde(rename = "GIT_COMMIT_MESSAGE_PREFIX")]
    pub commit_message_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    #[serde(rename = "DEFAULT")]
    pub general: GeneralConfig,
    #[serde(rename = "SYNC")]
    pub sync: SyncConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            general: GeneralConfig {
                log_dir: "~/.local/share/wal".to_string(),
                editor: "nvim".to_string(),
            },
            sync: SyncConfig {
                remote_url: String::new(),
                user_name: String::new(),
                user_email: String::new(),
                commit_message_prefix: "wal sync".to_string(),
            },
        }
    }
}

// On-disk shape: every field optional so absence can be reported by name.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "DEFAULT")]
    general: Option<toml::Table>,
    #[serde(rename = "SYNC")]
    sync: Option<toml::Table>,
}

impl Config {
    /// Default config file path (~/.config/wal/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".config").join("wal").join("config.toml"))
            .ok_or_else(|| {
                WalError::Config("Could not determine the home directory".to_string())
            })
    }

    /// Resolve the configuration file, creating it with defaults on first use
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if path.exists() {
            Self::load_from(&path)
        } else {
            let config = Config::default();
            config.save_to(&path)?;
            tracing::info!(path = %path.display(), "created default configuration");
            Ok(config)
        }
    }

    /// Load and validate config from the given file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents)?;

        let general = raw
            .general
            .ok_or_else(|| WalError::MissingConfigSection(DEFAULT_SECTION.to_string()))?;
        let sync = raw
            .sync
            .ok_or_else(|| WalError::MissingConfigSection(SYNC_SECTION.to_string()))?;

        let config = Config {
            general: GeneralConfig {
                log_dir: require(&general, DEFAULT_SECTION, "LOG_DIR")?,
                editor: require(&general, DEFAULT_SECTION, "EDITOR")?,
            },
            sync: SyncConfig {
                remote_url: require(&sync, SYNC_SECTION, "GIT_REMOTE_URL")?,
                user_name: require(&sync, SYNC_SECTION, "GIT_USER_NAME")?,
                user_email: require(&sync, SYNC_SECTION, "GIT_USER_EMAIL")?,
                commit_message_prefix: require(&sync, SYNC_SECTION, "GIT_COMMIT_MESSAGE_PREFIX")?,
            },
        };

        for (key, value) in [
            ("LOG_DIR", &config.general.log_dir),
            ("EDITOR", &config.general.editor),
        ] {
            if value.trim().is_empty() {
                return Err(WalError::Config(format!(
                    "{} in section [{}] must not be empty",
                    key, DEFAULT_SECTION
                )));
            }
        }

        Ok(config)
    }

    /// Save config to the given file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Log directory with `~` and environment variables expanded
    pub fn log_dir(&self) -> Result<PathBuf> {
        let expanded = shellexpand::full(&self.general.log_dir).map_err(|e| {
            WalError::Config(format!("Failed to expand LOG_DIR '{}': {}", self.general.log_dir, e))
        })?;
        Ok(PathBuf::from(expanded.into_owned()))
    }

    /// Ensure the sync identity is usable before touching a fresh repository
    pub fn require_sync_identity(&self) -> Result<()> {
        let fields = [
            ("GIT_REMOTE_URL", &self.sync.remote_url),
            ("GIT_USER_NAME", &self.sync.user_name),
            ("GIT_USER_EMAIL", &self.sync.user_email),
        ];

        for (key, value) in fields {
            if value.trim().is_empty() {
                return Err(WalError::MissingConfigKey {
                    section: SYNC_SECTION.to_string(),
                    key: key.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn require(table: &toml::Table, section: &str, key: &str) -> Result<String> {
    match table.get(key) {
        None => Err(WalError::MissingConfigKey {
            section: section.to_string(),
            key: key.to_string(),
        }),
        Some(toml::Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(WalError::Config(format!(
            "{} in section [{}] must be a string, found {}",
            key,
            section,
            other.type_str()
        ))),
    }
}
