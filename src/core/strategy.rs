//! Resolution strategies.
//!
//! A raw expression is parsed once into a [`Strategy`] before anything runs.
//! Dispatch order, first match wins:
//!
//! | expression                     | strategy                      |
//! |--------------------------------|-------------------------------|
//! | `file:<inner>` (side files on) | `FileBacked(parse(inner))`    |
//! | `prompt("<label>")`            | `Prompt(label)`               |
//! | `'text'` or `"text"`           | `Literal(text)`               |
//! | first word is a program        | `Command(expression)`         |
//! | any other non-empty text       | `Literal(expression)`         |
//! | empty                          | `Prompt("Enter value for KEY: ")` |

use crate::core::constants;

/// How a declaration's value is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Literal(String),
    Command(String),
    Prompt(String),
    /// The inner value is written to a side file instead of inlined.
    FileBacked(Box<Strategy>),
}

impl Strategy {
    /// Parse a raw expression.
    ///
    /// `side_files` enables the `file:` prefix. `is_program` decides whether
    /// the first word of an expression names something runnable.
    pub fn parse(
        key: &str,
        expression: &str,
        side_files: bool,
        is_program: &dyn Fn(&str) -> bool,
    ) -> Self {
        let expression = expression.trim();

        if side_files {
            if let Some(inner) = expression.strip_prefix(constants::FILE_PREFIX) {
                let inner = Self::parse(key, inner, false, is_program);
                return Strategy::FileBacked(Box::new(inner));
            }
        }

        if let Some(rest) = expression.strip_prefix(constants::PROMPT_OPEN) {
            let label = rest
                .rfind(constants::PROMPT_CLOSE)
                .map(|end| &rest[..end])
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| constants::default_prompt_label(key));
            return Strategy::Prompt(label);
        }

        if expression.is_empty() {
            return Strategy::Prompt(constants::default_prompt_label(key));
        }

        if let Some(text) = unquote(expression) {
            return Strategy::Literal(text.to_string());
        }

        if looks_like_command(expression, is_program) {
            Strategy::Command(expression.to_string())
        } else {
            Strategy::Literal(expression.to_string())
        }
    }

    /// Whether the value goes to a side file.
    pub fn is_file_backed(&self) -> bool {
        matches!(self, Strategy::FileBacked(_))
    }
}

/// Inner text of a value wrapped entirely in matching quotes.
fn unquote(expression: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if expression.len() >= 2 && expression.starts_with(quote) && expression.ends_with(quote) {
            let inner = &expression[1..expression.len() - 1];
            if !inner.contains(quote) {
                return Some(inner);
            }
        }
    }
    None
}

fn looks_like_command(expression: &str, is_program: &dyn Fn(&str) -> bool) -> bool {
    if expression.starts_with("$(") || expression.starts_with('`') {
        return true;
    }

    match expression.split_whitespace().next() {
        Some(word) => is_program(word),
        None => false,
    }
}
