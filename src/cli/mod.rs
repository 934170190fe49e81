//! Command-line interface.

pub mod completions;
pub mod deploy;
pub mod generate;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::report::Reporter;
use crate::error::Result;

/// skylab-secrets - provision service secrets from templates.
#[derive(Parser)]
#[command(
    name = "skylab-secrets",
    about = "Provision service secrets from declarative templates",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory templates are read from [default: secrets]
    #[arg(long, global = true, env = "SKYLAB_TEMPLATES")]
    pub templates_dir: Option<PathBuf>,

    /// Config file [default: ./skylab.toml if present]
    #[arg(long, global = true, env = "SKYLAB_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a template into an owner-only plaintext EnvironmentFile
    Deploy {
        /// Template file name under the templates directory
        #[arg(long)]
        template: String,
        /// Directory receiving the file and any side files
        #[arg(long, alias = "outputDir")]
        output_dir: PathBuf,
        /// Echo the resolved document after writing it
        #[arg(long)]
        print: bool,
    },

    /// Resolve a template and encrypt it for a recipient public key
    Generate {
        /// Template file name under the templates directory
        #[arg(long)]
        template: String,
        /// Recipient public key file (ssh or age)
        #[arg(long, alias = "sshPublicKey")]
        ssh_public_key: PathBuf,
        /// Directory receiving the encrypted file
        #[arg(long, alias = "outputDir")]
        output_dir: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Options shared by every command.
pub struct Context {
    pub config: Config,
}

impl Context {
    /// Load config, letting flags override file values.
    pub fn load(config: Option<&Path>, templates_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = Config::load(config)?;
        if let Some(dir) = templates_dir {
            config.templates_dir = dir;
        }
        Ok(Self { config })
    }
}

/// Prints engine progress through the output helpers.
pub struct Console;

impl Reporter for Console {
    fn comment(&self, text: &str) {
        output::comment(text);
    }

    fn executing(&self, _key: &str, expression: &str) {
        output::executing(expression);
    }

    fn side_file(&self, key: &str, path: &Path) {
        output::side_file(key, path);
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    match cli.command {
        Deploy {
            template,
            output_dir,
            print,
        } => {
            let ctx = Context::load(cli.config.as_deref(), cli.templates_dir)?;
            deploy::execute(&ctx, &template, &output_dir, print)
        }
        Generate {
            template,
            ssh_public_key,
            output_dir,
        } => {
            let ctx = Context::load(cli.config.as_deref(), cli.templates_dir)?;
            generate::execute(&ctx, &template, &ssh_public_key, &output_dir)
        }
        Completions { shell } => completions::execute(shell),
    }
}

/// Print the success line and the configured follow-up reminder.
fn finish(ctx: &Context, path: &Path) {
    output::success(&format!("secrets saved to {}", output::path(path)));
    if !ctx.config.apply_hint.is_empty() {
        output::hint(&ctx.config.apply_hint);
    }
}
