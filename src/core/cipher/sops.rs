//! SOPS encryption backend.
//!
//! Pipes the document through
//! `sops --encrypt <key flag> <key path> --input-type <fmt> --output-type <fmt> /dev/stdin`.
//!
//! ## Requirements
//!
//! - `sops` (or the configured program) must be on `PATH`
//! - the recipient public key file must be readable

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::trace;

use super::{Encryptor, Recipient};
use crate::core::config::EncryptorConfig;
use crate::error::{EncryptionError, Result};

/// Encrypts with the sops CLI, or any program taking the same arguments.
#[derive(Debug, Clone)]
pub struct Sops {
    program: String,
    key_flag: String,
    format: String,
    public_key: PathBuf,
}

impl Sops {
    pub fn new(config: &EncryptorConfig, recipient: &Recipient) -> Self {
        Self {
            program: config.program.clone(),
            key_flag: config.key_flag.clone(),
            format: config.format.clone(),
            public_key: recipient.path().to_path_buf(),
        }
    }

    /// Arguments passed to the program.
    fn args(&self) -> Vec<String> {
        vec![
            "--encrypt".to_string(),
            self.key_flag.clone(),
            self.public_key.display().to_string(),
            "--input-type".to_string(),
            self.format.clone(),
            "--output-type".to_string(),
            self.format.clone(),
            "/dev/stdin".to_string(),
        ]
    }

    /// Resolve the program on PATH.
    fn locate(&self) -> Result<PathBuf> {
        which::which(&self.program)
            .map_err(|_| EncryptionError::NotFound(self.program.clone()).into())
    }
}

impl Encryptor for Sops {
    fn name(&self) -> &str {
        &self.program
    }

    fn check(&self) -> Result<()> {
        self.locate().map(|_| ())
    }

    fn encrypt(&self, plaintext: &str) -> Result<String> {
        trace!(
            program = %self.program,
            plaintext_len = plaintext.len(),
            "encrypting"
        );

        let program = self.locate()?;

        let mut child = Command::new(&program)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| EncryptionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A program that exits without reading reports through its status.
            if let Err(source) = stdin.write_all(plaintext.as_bytes()) {
                if source.kind() != ErrorKind::BrokenPipe {
                    return Err(EncryptionError::Spawn {
                        program: self.program.clone(),
                        source,
                    }
                    .into());
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|source| EncryptionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(EncryptionError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let ciphertext = String::from_utf8(output.stdout)
            .map_err(|_| EncryptionError::InvalidOutput(self.program.clone()))?;

        if ciphertext.trim().is_empty() {
            return Err(EncryptionError::EmptyOutput(self.program.clone()).into());
        }

        trace!(ciphertext_len = ciphertext.len(), "encrypted");
        Ok(ciphertext)
    }
}
