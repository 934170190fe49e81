//! Template loading and line classification.
//!
//! A template is a plain-text file of `KEY=expression` declarations,
//! `#` comments and blank lines. Lines that are none of these are free-form
//! text and are dropped from the output.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{InputError, Result};

/// One parsed `KEY=expression` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub key: String,
    pub expression: String,
}

/// Classification of a single template line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Empty after trimming.
    Blank,
    /// Starts with `#`; carried into the output verbatim.
    Comment(String),
    /// Contains `=`; split at the first occurrence.
    Assignment(Declaration),
    /// Neither blank, comment, nor assignment. Dropped, not an error.
    Freeform(String),
}

impl Line {
    /// Classify one physical line of template text.
    pub fn classify(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Line::Blank;
        }

        if line.starts_with('#') {
            return Line::Comment(line.to_string());
        }

        match line.split_once('=') {
            Some((key, expression)) => Line::Assignment(Declaration {
                key: key.trim().to_string(),
                expression: expression.trim().to_string(),
            }),
            None => Line::Freeform(line.to_string()),
        }
    }
}

/// A template loaded from the templates root.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    path: PathBuf,
    text: String,
}

impl Template {
    /// Load `<root>/<name>`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidTemplateName` if the name escapes the root,
    /// or `InputError::TemplateNotFound` if the file does not exist.
    pub fn load(root: &Path, name: &str) -> Result<Self> {
        validate_name(name)?;

        let path = root.join(name);
        if !path.is_file() {
            return Err(InputError::TemplateNotFound(path).into());
        }

        debug!(path = %path.display(), "loading template");
        let text = std::fs::read_to_string(&path)?;

        Ok(Self {
            name: name.to_string(),
            path,
            text,
        })
    }

    /// Build a template from in-memory text.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: PathBuf::from(&name),
            name,
            text: text.into(),
        }
    }

    /// Template name, also the destination file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the template was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Classified lines in template order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.text.lines().map(Line::classify)
    }
}

/// Template names are relative paths below the templates root.
fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| -> crate::error::Error {
        InputError::InvalidTemplateName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }

    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => {}
            Component::CurDir => {}
            _ => return Err(invalid("must be a relative path inside the templates directory")),
        }
    }

    Ok(())
}
