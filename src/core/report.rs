//! Operator-facing progress events.
//!
//! The engine announces what it is about to do so an operator can review
//! which commands run with their privileges. The CLI prints these; tests and
//! library callers can stay quiet with [`Silent`].

use std::path::Path;

/// Receives progress events during a provisioning run.
pub trait Reporter {
    /// A template comment, in template order.
    fn comment(&self, _text: &str) {}

    /// A command is about to run for `key`.
    fn executing(&self, _key: &str, _expression: &str) {}

    /// A side file was written for `key`.
    fn side_file(&self, _key: &str, _path: &Path) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {}
