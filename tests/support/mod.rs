//! Test support utilities for skylab-secrets integration tests.
//!
//! Provides an isolated working directory with a `secrets/` template root
//! and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Test environment with an isolated working directory.
///
/// Child processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Working directory; templates live in `secrets/`
    pub dir: TempDir,
}

impl Test {
    /// Create a new environment with an empty template root.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("secrets")).expect("failed to create secrets dir");
        Self { dir }
    }

    /// Create an environment holding one template.
    pub fn with_template(name: &str, text: &str) -> Self {
        let t = Self::new();
        t.template(name, text);
        t
    }

    /// Write `secrets/<name>`.
    pub fn template(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join("secrets").join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create template dir");
        }
        std::fs::write(&path, text).expect("failed to write template");
        path
    }

    /// Default output directory, `<dir>/out`.
    pub fn out(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Path inside the working directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write `skylab.toml` in the working directory.
    pub fn config(&self, toml: &str) {
        std::fs::write(self.path("skylab.toml"), toml).expect("failed to write config");
    }

    /// Write an executable shell script and return its absolute path.
    #[cfg(unix)]
    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("failed to write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod script");
        path
    }

    /// Install a fake encryptor that prefixes every line with `ENC:` and
    /// point `skylab.toml` at it.
    #[cfg(unix)]
    pub fn fake_encryptor(&self) -> PathBuf {
        let script = self.script("fake-sops", "sed 's/^/ENC:/'");
        self.config(&format!("[encryptor]\nprogram = \"{}\"\n", script.display()));
        script
    }

    /// Write a valid recipient key and return its path.
    pub fn public_key(&self) -> PathBuf {
        let path = self.path("host.pub");
        std::fs::write(&path, format!("{}\n", SSH_PUBLIC_KEY)).expect("failed to write key");
        path
    }
}

/// Permission bits of `path`.
#[cfg(unix)]
pub fn mode(path: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .expect("failed to stat")
        .permissions()
        .mode()
        & 0o777
}
