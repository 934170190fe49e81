//! Environment-file encoding of resolved values.

use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::core::constants;

/// How multi-line values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiline {
    /// `KEY="line1\<newline>line2"` for a supervisor EnvironmentFile.
    Escape,
    /// `KEY='line1<newline>line2'` for input to an encryption step.
    Quote,
}

/// A fully resolved declaration.
#[derive(Debug, Clone)]
pub struct ResolvedValue {
    pub key: String,
    pub value: Zeroizing<String>,
    /// The value belongs in a side file; only a reference is inlined.
    pub side_file: bool,
}

/// Path of the side file holding `key` under `dir`.
pub fn side_file_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!(
        "{}.{}",
        key.to_lowercase(),
        constants::SIDE_FILE_EXTENSION
    ))
}

/// Encode a resolved value as one `KEY=...` entry, without the trailing
/// newline. `dir` is the destination directory side files live in.
pub fn encode(resolved: &ResolvedValue, dir: &Path, style: Multiline) -> Zeroizing<String> {
    let key = &resolved.key;

    if resolved.side_file {
        let path = side_file_path(dir, key);
        return Zeroizing::new(format!(
            "{}{}={}",
            key,
            constants::SIDE_FILE_KEY_SUFFIX,
            path.display()
        ));
    }

    let value = resolved.value.as_str();
    if !value.contains('\n') {
        return Zeroizing::new(format!("{}={}", key, value));
    }

    match style {
        Multiline::Escape => {
            let escaped = Zeroizing::new(value.replace('\n', "\\\n"));
            Zeroizing::new(format!("{}=\"{}\"", key, escaped.as_str()))
        }
        Multiline::Quote => Zeroizing::new(format!("{}='{}'", key, value)),
    }
}

/// Reverse [`Multiline::Escape`] on the part after `KEY=`.
///
/// Returns `None` if the text is not double-quoted.
pub fn decode_escaped(encoded: &str) -> Option<String> {
    let inner = encoded.strip_prefix('"')?.strip_suffix('"')?;
    Some(inner.replace("\\\n", "\n"))
}
