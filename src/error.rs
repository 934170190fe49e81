//! Error types.
//!
//! Every failure is terminal for a provisioning run. The domain enums below
//! are wrapped by [`Error`] so callers can match on the category while `?`
//! converts them automatically.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for all skylab-secrets operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Encryption(#[from] EncryptionError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Missing or invalid operator input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("template not found at {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("invalid template name '{name}': {reason}")]
    InvalidTemplateName { name: String, reason: String },

    #[error("public key not found at {}", .0.display())]
    PublicKeyNotFound(PathBuf),

    #[error("invalid public key in {}: {reason}", .path.display())]
    InvalidPublicKey { path: PathBuf, reason: String },

    #[error("invalid key '{key}' for side file: {reason}")]
    InvalidSideFileKey { key: String, reason: String },
}

/// A declaration's command could not be run or exited abnormally.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to run command for {key} ({expression}): {source}")]
    Spawn {
        key: String,
        expression: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command for {key} failed with {status}: {expression}")]
    Failed {
        key: String,
        expression: String,
        status: String,
    },

    #[error("command for {key} produced non UTF-8 output: {expression}")]
    InvalidOutput { key: String, expression: String },
}

/// The external encryption utility failed.
#[derive(Error, Debug)]
pub enum EncryptionError {
    #[error("{0} not found on PATH")]
    NotFound(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("{0} produced no output")]
    EmptyOutput(String),

    #[error("{0} produced non UTF-8 output")]
    InvalidOutput(String),
}

/// A destination or side file could not be written or protected.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to restrict permissions on {}: {source}", .path.display())]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
