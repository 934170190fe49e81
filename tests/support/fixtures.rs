//! Test fixtures and constants.

/// A valid OpenSSH ed25519 public key.
pub const SSH_PUBLIC_KEY: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIHsKLqeplhpW+uObz5dvMgjz1OxfM/XXUB+VHtZ6isGN alice@rust";

/// A valid age public key.
pub const AGE_PUBLIC_KEY: &str = "age1ql3z7hjy54pw3hyww5ayyfg7zqgvc7w3j2elw8zmrj2kg5sfn9aqmcac8p";

/// The canonical mixed template: command, side file, comment, blank, literal.
pub const MIXED_TEMPLATE: &str = "A=echo hi\nB=file:echo secret\n# note\n\nC=plainvalue";

/// Comments and blank lines only.
pub const COMMENTS_ONLY: &str = "# service: api\n\n# owner: platform\n#\n\n";
