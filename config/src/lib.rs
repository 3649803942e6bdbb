//! Configuration loading for Awaiter.
//!
//! Wait settings live under a `[wait]` table in a TOML file:
//!
//! ```toml
//! [wait]
//! check_interval_ms = 250
//! timeout_ms = 10000
//! ```
//!
//! Missing keys (or a missing table) fall back to [`WaitConfig::default`].

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use awaiter_types::WaitConfig;
use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

#[derive(Debug, Default, Deserialize)]
pub struct WaiterConfigFile {
    pub wait: Option<WaitConfig>,
}

impl WaiterConfigFile {
    #[must_use]
    pub fn wait_config(&self) -> WaitConfig {
        self.wait.unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: TomlError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Parse wait settings from TOML text. `path` is only used for error reporting.
pub fn parse_wait_config(content: &str, path: &Path) -> Result<WaitConfig, ConfigError> {
    match toml::from_str::<WaiterConfigFile>(content) {
        Ok(file) => Ok(file.wait_config()),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to parse wait config");
            Err(ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            })
        }
    }
}

/// Read and parse wait settings from a TOML file.
pub fn load_wait_config(path: impl AsRef<Path>) -> Result<WaitConfig, ConfigError> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to read wait config");
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let config = parse_wait_config(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        check_interval_ms = config.check_interval().as_millis(),
        timeout_ms = config.timeout().as_millis(),
        "Loaded wait config"
    );
    Ok(config)
}
