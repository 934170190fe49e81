//! Deploy command.
//!
//! Resolves a template into a plaintext EnvironmentFile for a process
//! supervisor. `file:` declarations become owner-only side files.

use std::path::Path;

use tracing::info;

use crate::cli::{finish, output, Console, Context};
use crate::core::exec::Shell;
use crate::core::prompt::Terminal;
use crate::core::provision::{PlaintextDestination, Provisioner};
use crate::core::template::Template;
use crate::error::Result;

/// Deploy `template` into `output_dir`.
pub fn execute(ctx: &Context, template: &str, output_dir: &Path, print: bool) -> Result<()> {
    let template = Template::load(&ctx.config.templates_dir, template)?;
    info!(template = %template.path().display(), "deploying");

    output::header(&format!("SKYLAB Secret Deployer: {}", template.name()));

    let destination = PlaintextDestination::new(output_dir, template.name())?;
    let shell = Shell::new(ctx.config.shell.as_str());
    let mut prompter = Terminal;

    let provisioned =
        Provisioner::new(&shell, &mut prompter, &Console).provision(&template, &destination)?;

    if print {
        output::warn("final secret file (unencrypted)");
        print!("{}", provisioned.document.as_str());
    }

    finish(ctx, &provisioned.path);
    Ok(())
}
