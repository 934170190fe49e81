//! Output document.

use zeroize::Zeroizing;

/// Append-only environment-file text. Wiped from memory on drop.
#[derive(Debug, Default)]
pub struct Document {
    text: Zeroizing<String>,
    entries: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line; a newline is added.
    pub fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    /// Append an encoded `KEY=...` entry.
    pub fn push_entry(&mut self, entry: &str) {
        self.push_line(entry);
        self.entries += 1;
    }

    pub fn push_blank(&mut self) {
        self.text.push('\n');
    }

    /// Number of `KEY=...` entries appended.
    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
