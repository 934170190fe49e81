//! Encryption of the finished document.
//!
//! Encryption is delegated to an external utility that takes the plaintext
//! environment file on stdin and prints ciphertext in the same format.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Encryptor` trait
//! 2. Add the implementation in a new file (e.g., `sops.rs`)
//! 3. Re-export from this module

mod recipient;
mod sops;

pub use recipient::{load_recipient, Recipient};
pub use sops::Sops;

use crate::error::Result;

/// Encryption backend trait.
pub trait Encryptor {
    /// Backend name, for messages.
    fn name(&self) -> &str;

    /// Fail early if the backend cannot run at all.
    fn check(&self) -> Result<()> {
        Ok(())
    }

    /// Encrypt an environment-file document.
    ///
    /// # Errors
    ///
    /// Returns `EncryptionError` if the backend fails or produces nothing.
    fn encrypt(&self, plaintext: &str) -> Result<String>;
}
