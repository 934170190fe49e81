//! skylab-secrets - provision service secrets from declarative templates.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── deploy        # Plaintext EnvironmentFile + side files
//! │   ├── generate      # Encrypted EnvironmentFile
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Provisioning engine
//!     ├── template      # Template loading, line classification
//!     ├── strategy      # Expression -> resolution strategy
//!     ├── resolve       # Strategy interpreter
//!     ├── encode        # EnvironmentFile encoding
//!     ├── document      # Output buffer
//!     ├── provision     # Provisioner and destinations
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Encryptor trait
//!     │   ├── recipient # Recipient key validation
//!     │   └── sops      # sops CLI backend
//!     ├── exec          # Command execution
//!     ├── prompt        # Interactive input
//!     ├── report        # Progress events
//!     ├── fs            # Owner-only atomic writes
//!     ├── config        # skylab.toml
//!     └── constants
//! ```
//!
//! # Template language
//!
//! ```text
//! # comments and blank lines are kept
//! DATABASE_URL=postgres://localhost/app        literal
//! SESSION_KEY=openssl rand -hex 32              command output
//! GITHUB_TOKEN=prompt("GitHub token")           interactive
//! ADMIN_PASSWORD=                               interactive, default label
//! TLS_KEY=file:cat /etc/ssl/private/app.key     side file, TLS_KEY_FILE=<path>
//! ```

pub mod cli;
pub mod core;
pub mod error;
