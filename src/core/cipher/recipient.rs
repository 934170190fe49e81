//! Recipient public keys.
//!
//! The key file is only handed to the encryption utility by path, but it is
//! parsed up front so a missing or malformed key fails before any command
//! runs or any prompt is shown.

use std::path::{Path, PathBuf};

use ::age::{ssh, x25519};
use tracing::debug;

use crate::error::{InputError, Result};

/// A validated recipient public key.
#[derive(Debug, Clone)]
pub struct Recipient {
    path: PathBuf,
    kind: &'static str,
}

impl Recipient {
    /// Path of the key file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `"ssh"` or `"age"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

/// Load and validate the recipient key at `path`.
///
/// Accepts an OpenSSH public key (`ssh-ed25519 ...`, `ssh-rsa ...`) or an
/// age x25519 recipient (`age1...`).
///
/// # Errors
///
/// Returns `InputError::PublicKeyNotFound` if the file is missing, or
/// `InputError::InvalidPublicKey` if it holds neither key type.
pub fn load_recipient(path: &Path) -> Result<Recipient> {
    if !path.is_file() {
        return Err(InputError::PublicKeyNotFound(path.to_path_buf()).into());
    }

    let contents = std::fs::read_to_string(path)?;
    let key = contents.trim();

    let invalid = |reason: String| -> crate::error::Error {
        InputError::InvalidPublicKey {
            path: path.to_path_buf(),
            reason,
        }
        .into()
    };

    if key.is_empty() {
        return Err(invalid("file is empty".to_string()));
    }

    let kind = if key.starts_with("age1") {
        key.parse::<x25519::Recipient>()
            .map_err(|e| invalid(e.to_string()))?;
        "age"
    } else {
        key.parse::<ssh::Recipient>()
            .map_err(|e| invalid(format!("{:?}", e)))?;
        "ssh"
    };

    debug!(path = %path.display(), kind, "recipient key validated");

    Ok(Recipient {
        path: path.to_path_buf(),
        kind,
    })
}
