//! Generate command.
//!
//! Resolves a template and encrypts it for a recipient public key before
//! anything touches disk.

use std::path::Path;

use tracing::info;

use crate::cli::{finish, output, Console, Context};
use crate::core::cipher::{load_recipient, Sops};
use crate::core::exec::Shell;
use crate::core::prompt::Terminal;
use crate::core::provision::{EncryptedDestination, Provisioner};
use crate::core::template::Template;
use crate::error::Result;

/// Generate an encrypted copy of `template` in `output_dir`.
pub fn execute(ctx: &Context, template: &str, public_key: &Path, output_dir: &Path) -> Result<()> {
    let template = Template::load(&ctx.config.templates_dir, template)?;
    let recipient = load_recipient(public_key)?;
    info!(
        template = %template.path().display(),
        recipient = recipient.kind(),
        "generating"
    );

    output::header(&format!("SKYLAB Secret Generator: {}", template.name()));

    let encryptor = Sops::new(&ctx.config.encryptor, &recipient);
    let destination = EncryptedDestination::new(output_dir, template.name(), Box::new(encryptor))?;
    let shell = Shell::new(ctx.config.shell.as_str());
    let mut prompter = Terminal;

    let provisioned =
        Provisioner::new(&shell, &mut prompter, &Console).provision(&template, &destination)?;

    info!(encryptor = destination.encryptor().name(), "encrypted");
    finish(ctx, &provisioned.path);
    Ok(())
}
