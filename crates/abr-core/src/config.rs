use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::pause::PauseRange;

/// A configuration value that fails validation before any job is scheduled.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("threads must be at least 1")]
    ZeroThreads,
    #[error("attempts must be at least 1")]
    ZeroAttempts,
    #[error("{field}: range [{min}, {max}] is not ordered (min > max)")]
    UnorderedRange {
        field: &'static str,
        min: u64,
        max: u64,
    },
    #[error("account_range [{start}, {end}] is invalid: start must be >= 1 and <= end")]
    InvalidAccountRange { start: u64, end: u64 },
}

/// Global configuration loaded from `~/.config/abr/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbrConfig {
    /// Maximum number of account jobs running concurrently.
    pub threads: usize,
    /// 1-based inclusive account slice; `[0, 0]` means all accounts.
    pub account_range: [u64; 2],
    /// Maximum invocations of the init step per account (including the first).
    pub attempts: u32,
    /// Jittered backoff between retry attempts, in seconds.
    pub pause_between_attempts: PauseRange,
    /// Jittered pause after each account completes, in seconds.
    pub pause_between_accounts: PauseRange,
}

impl Default for AbrConfig {
    fn default() -> Self {
        Self {
            threads: 4,
            account_range: [0, 0],
            attempts: 5,
            pause_between_attempts: PauseRange(3, 10),
            pause_between_accounts: PauseRange(10, 30),
        }
    }
}

impl AbrConfig {
    /// Fail fast on an invalid ceiling, attempt budget, or range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::ZeroThreads);
        }
        if self.attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        for (field, range) in [
            ("pause_between_attempts", self.pause_between_attempts),
            ("pause_between_accounts", self.pause_between_accounts),
        ] {
            if !range.is_ordered() {
                return Err(ConfigError::UnorderedRange {
                    field,
                    min: range.min_secs(),
                    max: range.max_secs(),
                });
            }
        }
        let [start, end] = self.account_range;
        if (start, end) != (0, 0) && (start == 0 || start > end) {
            return Err(ConfigError::InvalidAccountRange { start, end });
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("abr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AbrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AbrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        default_cfg.validate()?;
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<AbrConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: AbrConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}
