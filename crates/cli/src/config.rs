// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration file
//!
//! Read from `$KNACK_CONFIG`, else `<config dir>/knack/config.toml`. A
//! missing file means defaults; a malformed one is an error.

use knack_adapters::{LockConfig, PagerConfig};
use knack_core::{CronError, HashId, NumFmt, WerderConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV: &str = "KNACK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("[cron] {0}")]
    HashId(#[from] CronError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub numfmt: NumFmt,
    pub werder: WerderConfig,
    pub pager: PagerSection,
    pub lock: LockConfig,
    pub cron: CronSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PagerSection {
    pub enabled: bool,
    /// Overrides `$PAGER`
    pub command: Option<String>,
}

impl Default for PagerSection {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
        }
    }
}

impl PagerSection {
    pub fn pager_config(&self) -> PagerConfig {
        let config = PagerConfig::from_env();
        match &self.command {
            Some(command) if !command.trim().is_empty() => config.with_command(command),
            _ => config,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CronSection {
    /// Default hash id: a string or an array of byte values
    pub hash_id: Option<toml::Value>,
}

impl CronSection {
    pub fn hash_id(&self) -> Result<Option<HashId>, ConfigError> {
        match &self.hash_id {
            Some(value) => Ok(Some(HashId::try_from(value)?)),
            None => Ok(None),
        }
    }
}

impl Config {
    /// Load from the default location
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        // Reject a bad hash id at load time
        config.cron.hash_id()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("knack").join("config.toml"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
