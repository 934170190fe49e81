//! Constants used throughout skylab-secrets.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "skylab.toml";

/// Default template root, relative to the working directory.
pub const TEMPLATES_DIR: &str = "secrets";

/// Shell used to evaluate command expressions.
pub const DEFAULT_SHELL: &str = "sh";

/// Prefix marking a declaration whose value goes to a side file.
pub const FILE_PREFIX: &str = "file:";

/// Opening of an explicit prompt expression, `prompt("...")`.
pub const PROMPT_OPEN: &str = "prompt(\"";

/// Closing of an explicit prompt expression.
pub const PROMPT_CLOSE: &str = "\")";

/// Extension of side files, `<lowercased key>.secret`.
pub const SIDE_FILE_EXTENSION: &str = "secret";

/// Suffix appended to a key that references a side file.
pub const SIDE_FILE_KEY_SUFFIX: &str = "_FILE";

/// Owner read/write only.
pub const SECRET_FILE_MODE: u32 = 0o600;

/// Default encryption utility.
pub const DEFAULT_ENCRYPTOR: &str = "sops";

/// Flag passing the recipient public key to the encryption utility.
pub const DEFAULT_KEY_FLAG: &str = "--ssh-public-key";

/// Input and output format declared to the encryption utility.
pub const DEFAULT_ENCRYPTOR_FORMAT: &str = "dotenv";

/// Reminder printed after a successful run.
pub const DEFAULT_APPLY_HINT: &str = "run 'update-nix' to apply changes";

/// Shell builtins accepted as the first word of a command expression even
/// when no executable of that name is on `PATH`.
pub const SHELL_BUILTINS: &[&str] = &[
    "echo", "printf", "read", "cd", "export", "eval", "exec", "exit", "test", "[", "true",
    "false", ":", ".", "command", "type",
];

/// Default label for an empty expression.
pub fn default_prompt_label(key: &str) -> String {
    format!("Enter value for {}: ", key)
}
