//! Command execution.
//!
//! Command expressions run through a shell with stdin and stderr inherited so
//! the operator can answer tool prompts and see diagnostics. Only stdout is
//! captured as the value.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::core::constants;
use crate::error::{CommandError, Result};

/// Runs command expressions on behalf of the resolver.
pub trait CommandRunner {
    /// Whether `word`, the first word of an expression, names something
    /// this runner can execute.
    fn is_program(&self, word: &str) -> bool;

    /// Run `expression` and return its stdout with trailing whitespace
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the command cannot be started or exits
    /// with a non-zero status.
    fn run(&self, key: &str, expression: &str) -> Result<String>;
}

/// Runs expressions with `<shell> -c <expression>`.
#[derive(Debug, Clone)]
pub struct Shell {
    program: String,
}

impl Shell {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(constants::DEFAULT_SHELL)
    }
}

impl CommandRunner for Shell {
    fn is_program(&self, word: &str) -> bool {
        if constants::SHELL_BUILTINS.contains(&word) {
            return true;
        }

        if word.contains('/') {
            return is_executable(Path::new(word));
        }

        which::which(word).is_ok()
    }

    fn run(&self, key: &str, expression: &str) -> Result<String> {
        debug!(key, shell = %self.program, "running command");

        let output = Command::new(&self.program)
            .arg("-c")
            .arg(expression)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| CommandError::Spawn {
                key: key.to_string(),
                expression: expression.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                key: key.to_string(),
                expression: expression.to_string(),
                status: output.status.to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| CommandError::InvalidOutput {
            key: key.to_string(),
            expression: expression.to_string(),
        })?;

        trace!(key, output_len = stdout.len(), "command finished");
        Ok(stdout.trim_end().to_string())
    }
}

/// A regular file the current user may run. Paths to data files such as
/// certificates stay literal.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
