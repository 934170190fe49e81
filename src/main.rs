//! skylab-secrets - provision service secrets from declarative templates.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use skylab_secrets::cli::output;
use skylab_secrets::cli::{execute, Cli};
use skylab_secrets::error::{EncryptionError, Error, InputError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SKYLAB_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("skylab_secrets=debug")
        } else {
            EnvFilter::new("skylab_secrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Input(InputError::TemplateNotFound(_)) => {
                Some("templates are read from --templates-dir (default: ./secrets)")
            }
            Error::Encryption(EncryptionError::NotFound(_)) => {
                Some("install sops or set [encryptor] program in skylab.toml")
            }
            Error::Command(_) => Some("nothing was written"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
