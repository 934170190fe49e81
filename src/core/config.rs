//! Configuration file management.
//!
//! Reads the optional `skylab.toml`. Every field has a default, so a missing
//! file is the same as an empty one.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings from `skylab.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory templates are read from.
    pub templates_dir: PathBuf,
    /// Shell used for command expressions.
    pub shell: String,
    /// Reminder printed after a successful run. Empty disables it.
    pub apply_hint: String,
    /// Encryption utility used by `generate`.
    pub encryptor: EncryptorConfig,
}

/// Encryption utility invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncryptorConfig {
    pub program: String,
    /// Flag preceding the recipient public key path.
    pub key_flag: String,
    /// Declared input and output format.
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from(constants::TEMPLATES_DIR),
            shell: constants::DEFAULT_SHELL.to_string(),
            apply_hint: constants::DEFAULT_APPLY_HINT.to_string(),
            encryptor: EncryptorConfig::default(),
        }
    }
}

impl Default for EncryptorConfig {
    fn default() -> Self {
        Self {
            program: constants::DEFAULT_ENCRYPTOR.to_string(),
            key_flag: constants::DEFAULT_KEY_FLAG.to_string(),
            format: constants::DEFAULT_ENCRYPTOR_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load `path` if given, otherwise `skylab.toml` in the working directory
    /// if it exists, otherwise defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicitly given file is missing, or any
    /// file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(constants::CONFIG_FILE);
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        Self::parse(&path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }
}
