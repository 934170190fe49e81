//! Interactive input.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Password;

use crate::error::Result;

/// Source of operator-typed values.
pub trait Prompter {
    /// Show `label` and return one line of input. No input yields `""`.
    fn prompt(&mut self, label: &str) -> Result<String>;
}

/// Prompts on the controlling terminal with hidden input, or reads one line
/// from stdin when stdin is piped.
#[derive(Debug, Default)]
pub struct Terminal;

impl Prompter for Terminal {
    fn prompt(&mut self, label: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            // dialoguer appends its own ": "
            let label = label.trim_end().trim_end_matches(':');
            let value = Password::new()
                .with_prompt(label)
                .allow_empty_password(true)
                .interact()?;
            return Ok(value);
        }

        eprint!("{}", label);
        io::stderr().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Answers prompts from a fixed list, then with empty input.
#[derive(Debug, Default)]
pub struct Scripted {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl Scripted {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Labels shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for Scripted {
    fn prompt(&mut self, label: &str) -> Result<String> {
        self.asked.push(label.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
