//! Provisioning: template in, protected environment file out.
//!
//! The [`Provisioner`] walks a template in order, resolving and encoding
//! each declaration into a [`Document`], then hands the document to exactly
//! one [`Destination`]. Side files are staged next to their final paths as
//! their declarations resolve and are only renamed into place once the
//! destination file is ready too. If anything fails, the staged files are
//! discarded and every existing file is left as it was.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::cipher::Encryptor;
use crate::core::document::Document;
use crate::core::encode::{encode, side_file_path, Multiline};
use crate::core::exec::CommandRunner;
use crate::core::fs::{self, Staged};
use crate::core::prompt::Prompter;
use crate::core::report::Reporter;
use crate::core::resolve::Resolver;
use crate::core::template::{Line, Template};
use crate::error::{InputError, Result};

/// Where a finished document goes.
pub trait Destination {
    /// Absolute directory holding the destination file and side files.
    fn dir(&self) -> &Path;

    /// Final path of the document.
    fn path(&self) -> PathBuf;

    /// How multi-line values are encoded for this destination.
    fn multiline(&self) -> Multiline;

    /// Whether `file:` declarations are honored.
    fn side_files(&self) -> bool;

    /// Checks to run before anything is resolved.
    fn preflight(&self) -> Result<()> {
        Ok(())
    }

    /// Produce the destination file, staged but not yet in place.
    fn stage(&self, document: &Document) -> Result<Staged>;

    /// Stage the document, then rename `side_files` and the document into
    /// place. Returns the destination path.
    fn deliver(&self, document: &Document, side_files: Vec<Staged>) -> Result<PathBuf> {
        let staged = self.stage(document)?;

        for side_file in side_files {
            side_file.commit()?;
        }
        staged.commit()
    }
}

/// Plaintext EnvironmentFile for a process supervisor, owner-only.
#[derive(Debug, Clone)]
pub struct PlaintextDestination {
    dir: PathBuf,
    file_name: PathBuf,
}

impl PlaintextDestination {
    /// `<dir>/<file_name>`; `dir` is made absolute.
    pub fn new(dir: &Path, file_name: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            dir: fs::absolute(dir)?,
            file_name: file_name.into(),
        })
    }
}

impl Destination for PlaintextDestination {
    fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    fn multiline(&self) -> Multiline {
        Multiline::Escape
    }

    fn side_files(&self) -> bool {
        true
    }

    fn stage(&self, document: &Document) -> Result<Staged> {
        let staged = fs::stage_private(&self.path(), document.as_bytes())?;
        debug!(path = %staged.target().display(), "staged plaintext secrets");
        Ok(staged)
    }
}

/// Ciphertext produced by an external encryption utility.
pub struct EncryptedDestination {
    dir: PathBuf,
    file_name: PathBuf,
    encryptor: Box<dyn Encryptor>,
}

impl EncryptedDestination {
    /// `<dir>/<file_name>`; `dir` is made absolute.
    pub fn new(
        dir: &Path,
        file_name: impl Into<PathBuf>,
        encryptor: Box<dyn Encryptor>,
    ) -> Result<Self> {
        Ok(Self {
            dir: fs::absolute(dir)?,
            file_name: file_name.into(),
            encryptor,
        })
    }

    pub fn encryptor(&self) -> &dyn Encryptor {
        self.encryptor.as_ref()
    }
}

impl Destination for EncryptedDestination {
    fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    fn multiline(&self) -> Multiline {
        Multiline::Quote
    }

    // Plaintext side files next to ciphertext would defeat the encryption.
    fn side_files(&self) -> bool {
        false
    }

    fn preflight(&self) -> Result<()> {
        self.encryptor.check()
    }

    fn stage(&self, document: &Document) -> Result<Staged> {
        let ciphertext = zeroize::Zeroizing::new(self.encryptor.encrypt(document.as_str())?);
        let staged = fs::stage_private(&self.path(), ciphertext.as_bytes())?;
        debug!(
            path = %staged.target().display(),
            encryptor = self.encryptor.name(),
            "staged encrypted secrets"
        );
        Ok(staged)
    }
}

/// A resolved template, not yet delivered.
#[derive(Debug)]
pub struct Rendered {
    pub document: Document,
    /// Side files staged while rendering, in template order.
    pub side_files: Vec<Staged>,
}

/// A completed provisioning run.
#[derive(Debug)]
pub struct Provisioned {
    /// Destination file written.
    pub path: PathBuf,
    pub document: Document,
    pub side_files: Vec<PathBuf>,
}

/// Runs templates through resolution, encoding and delivery.
pub struct Provisioner<'a> {
    resolver: Resolver<'a>,
    reporter: &'a dyn Reporter,
}

impl<'a> Provisioner<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        prompter: &'a mut dyn Prompter,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            resolver: Resolver::new(runner, prompter, reporter),
            reporter,
        }
    }

    /// Resolve `template` for `destination` and deliver the result.
    ///
    /// # Errors
    ///
    /// Any error aborts the run. Staged side files are discarded, and the
    /// destination file and side files of a previous run are left untouched.
    pub fn provision(
        &mut self,
        template: &Template,
        destination: &dyn Destination,
    ) -> Result<Provisioned> {
        destination.preflight()?;

        let rendered = self.render(template, destination)?;
        let side_files = rendered
            .side_files
            .iter()
            .map(|staged| staged.target().to_path_buf())
            .collect();

        let path = destination.deliver(&rendered.document, rendered.side_files)?;
        info!(path = %path.display(), "wrote secrets");

        Ok(Provisioned {
            path,
            document: rendered.document,
            side_files,
        })
    }

    /// Resolve `template` for `destination` without delivering it.
    ///
    /// Side files are staged but not renamed into place; dropping the result
    /// discards them.
    pub fn render(
        &mut self,
        template: &Template,
        destination: &dyn Destination,
    ) -> Result<Rendered> {
        let mut rendered = Rendered {
            document: Document::new(),
            side_files: Vec::new(),
        };

        self.render_into(template, destination, &mut rendered)?;
        debug!(
            template = template.name(),
            entries = rendered.document.entries(),
            side_files = rendered.side_files.len(),
            "template rendered"
        );
        Ok(rendered)
    }

    fn render_into(
        &mut self,
        template: &Template,
        destination: &dyn Destination,
        rendered: &mut Rendered,
    ) -> Result<()> {
        let dir = destination.dir();
        let style = destination.multiline();
        let mut claimed = HashSet::new();
        self.resolver.set_side_files(destination.side_files());

        for line in template.lines() {
            match line {
                Line::Blank => rendered.document.push_blank(),
                Line::Comment(text) => {
                    self.reporter.comment(&text);
                    rendered.document.push_line(&text);
                }
                Line::Freeform(text) => {
                    debug!(line = %text, "dropping free-form line");
                }
                Line::Assignment(declaration) => {
                    if self.resolver.strategy(&declaration).is_file_backed() {
                        validate_side_file_key(&declaration.key)?;
                        claim_side_file(&declaration.key, &mut claimed)?;
                    }

                    let resolved = self.resolver.resolve(&declaration)?;

                    if resolved.side_file {
                        let path = side_file_path(dir, &resolved.key);
                        fs::ensure_dir(dir)?;
                        let staged = fs::stage_private(&path, resolved.value.as_bytes())?;
                        rendered.side_files.push(staged);
                        self.reporter.side_file(&resolved.key, &path);
                    }

                    let entry = encode(&resolved, dir, style);
                    rendered.document.push_entry(&entry);
                }
            }
        }

        Ok(())
    }
}

/// Side file names are derived from keys and must stay inside the
/// destination directory.
fn validate_side_file_key(key: &str) -> Result<()> {
    let invalid = |reason: &str| -> crate::error::Error {
        InputError::InvalidSideFileKey {
            key: key.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };

    if key.is_empty() {
        return Err(invalid("key is empty"));
    }

    if key.contains(['/', '\\', '\0']) {
        return Err(invalid("key contains a path separator"));
    }

    if key.starts_with('.') {
        return Err(invalid("key cannot start with '.'"));
    }

    Ok(())
}

/// Keys differing only in case share a side file name.
fn claim_side_file(key: &str, claimed: &mut HashSet<String>) -> Result<()> {
    if claimed.insert(key.to_lowercase()) {
        return Ok(());
    }

    Err(InputError::InvalidSideFileKey {
        key: key.to_string(),
        reason: "another key in this template already uses the same side file".to_string(),
    }
    .into())
}
